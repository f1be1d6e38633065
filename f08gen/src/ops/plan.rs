//! Manifest entries to function signatures.

use f08gen_manifest::{FunctionEntry, Manifest, ParamEntry};
use f08gen_types::{FunctionSpec, ParamSpec};

/// Signatures of every declared function, in manifest order.
pub fn function_specs(manifest: &Manifest) -> Vec<FunctionSpec> {
    manifest
        .functions
        .iter()
        .map(|(name, entry)| function_spec(name, entry))
        .collect()
}

pub fn function_spec(name: &str, entry: &FunctionEntry) -> FunctionSpec {
    entry
        .params
        .iter()
        .fold(FunctionSpec::new(name).bigcount(entry.bigcount), |spec, param| {
            spec.param(param_spec(param))
        })
}

fn param_spec(entry: &ParamEntry) -> ParamSpec {
    let mut spec = ParamSpec::new(&entry.kind, &entry.name);
    spec.count = entry.count.clone();
    spec.options = entry.option_strings();
    spec
}
