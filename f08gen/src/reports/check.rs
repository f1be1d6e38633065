//! Check command report data structures.

use std::path::PathBuf;

use f08gen_core::Mode;
use f08gen_types::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub mode: Mode,
    /// Declared functions.
    pub functions: usize,
    /// Function variants bound without error.
    pub variants: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn new(
        config_path: PathBuf,
        mode: Mode,
        functions: usize,
        variants: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            config_path,
            mode,
            functions,
            variants,
            diagnostics,
        }
    }

    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

fn located(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Error => out.error(&located(diag)),
                Severity::Warning => out.warning(&located(diag)),
                Severity::Info => out.preformatted(&format!("info: {}", located(diag))),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.count(Severity::Error),
                if self.count(Severity::Error) == 1 { "" } else { "s" }
            ));
        }
        out.newline();
        out.key_value("  mode", self.mode.as_str());
        out.key_value("  functions", &self.functions.to_string());
        out.key_value("  variants", &self.variants.to_string());
        let warnings = self.count(Severity::Warning);
        if warnings > 0 {
            out.key_value("  warnings", &warnings.to_string());
        }
    }
}
