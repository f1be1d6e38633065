//! Check operation - binds every function variant of a manifest.

use std::path::Path;

use f08gen_manifest::Manifest;
use f08gen_types::{Diagnostic, KindRegistry};

use super::function_specs;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Binding failures become error diagnostics so that every function is
/// checked, not only the first broken one.
pub fn check(manifest: &Manifest, registry: &KindRegistry, config_path: &Path) -> CheckReport {
    let mode = manifest.generator.mode;
    let mut diagnostics = Vec::new();
    let mut variants = 0;

    for function in function_specs(manifest) {
        for variant in function.variants(mode) {
            match registry.bind(&function, variant) {
                Ok(binding) => {
                    variants += 1;
                    diagnostics.extend_from_slice(binding.diagnostics());
                }
                Err(err) => {
                    diagnostics.push(
                        Diagnostic::error("bind", err.to_string())
                            .at(format!("functions.{}", function.name)),
                    );
                    // Both variants share the failing descriptor.
                    break;
                }
            }
        }
    }

    CheckReport::new(
        config_path.to_path_buf(),
        mode,
        manifest.functions.len(),
        variants,
        diagnostics,
    )
}
