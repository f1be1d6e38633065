//! Show operation - fragments of selected function variants.

use eyre::{Result, WrapErr, bail};
use f08gen_core::Mode;
use f08gen_manifest::Manifest;
use f08gen_types::{FunctionSpec, KindRegistry, Variant};

use super::function_specs;
use crate::reports::ShowReport;

/// Which functions and variants to show.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Only this function.
    pub function: Option<String>,
    /// Only the big-count variant, even where the manifest does not enable it.
    pub bigcount: bool,
    /// Override the manifest's interface mode.
    pub mode: Option<Mode>,
}

impl Selection {
    fn variants(&self, function: &FunctionSpec, mode: Mode) -> Vec<Variant> {
        if self.bigcount {
            vec![Variant::new(mode).bigcount(true)]
        } else {
            function.variants(mode)
        }
    }
}

/// Execute the show operation.
pub fn show(
    manifest: &Manifest,
    registry: &KindRegistry,
    selection: &Selection,
) -> Result<ShowReport> {
    let mode = selection.mode.unwrap_or(manifest.generator.mode);

    let functions: Vec<FunctionSpec> = function_specs(manifest)
        .into_iter()
        .filter(|f| selection.function.as_deref().is_none_or(|name| f.name == name))
        .collect();

    if let Some(name) = &selection.function {
        if functions.is_empty() {
            bail!("function '{}' is not declared in the manifest", name);
        }
    }

    let mut report = ShowReport::default();
    for function in &functions {
        for variant in selection.variants(function, mode) {
            let binding = registry
                .bind(function, variant)
                .wrap_err_with(|| format!("failed to bind '{}'", function.name))?;
            report.diagnostics.extend_from_slice(binding.diagnostics());
            report.bindings.push(binding.fragments());
        }
    }
    Ok(report)
}
