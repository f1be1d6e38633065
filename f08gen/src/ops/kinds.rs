//! Kinds operation - the registered parameter kinds.

use f08gen_types::KindRegistry;

use crate::reports::KindsReport;

/// Group registered tags by family, the part before the first `_`.
pub fn kinds(registry: &KindRegistry) -> KindsReport {
    let mut report = KindsReport::default();
    for tag in registry.tags() {
        let family = tag.split('_').next().unwrap_or(tag);
        report
            .families
            .entry(family.to_string())
            .or_default()
            .push(tag.to_string());
    }
    report
}
