//! Kinds command report data structures.

use std::collections::BTreeMap;

use super::output::{Output, Report};

/// Registered parameter kinds grouped by family.
#[derive(Debug, Default)]
pub struct KindsReport {
    pub families: BTreeMap<String, Vec<String>>,
}

impl KindsReport {
    /// Total number of tags.
    pub fn len(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }
}

impl Report for KindsReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} parameter kinds", self.len()));
        for (family, tags) in &self.families {
            out.newline();
            out.section(family);
            for tag in tags {
                out.list_item(tag);
            }
        }
    }
}
