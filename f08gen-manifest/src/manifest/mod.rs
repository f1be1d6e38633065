//! Manifest types for bindings.toml files.

mod file;
mod parse;

pub use file::BindingsToml;
pub use parse::parse_manifest;

use f08gen_core::{Mode, toml_value_to_string};
use indexmap::IndexMap;
use serde::Deserialize;

/// Root manifest for bindings.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Function signatures, keyed by base name, in file order.
    #[serde(default)]
    pub functions: IndexMap<String, FunctionEntry>,
}

/// The `[generator]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Interface to generate (`modern` or `legacy`).
    #[serde(default)]
    pub mode: Mode,
}

/// A `[functions.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionEntry {
    /// Also generate the big-count variant.
    #[serde(default)]
    pub bigcount: bool,

    #[serde(default)]
    pub params: Vec<ParamEntry>,
}

/// One entry of a function's `params` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamEntry {
    /// Registry tag, e.g. `COUNT` or `COMM_INOUT`.
    pub kind: String,
    pub name: String,
    /// Parameter or MPI constant giving the extent or length.
    #[serde(default)]
    pub count: Option<String>,
    /// Extra per-kind options (`asynchronous`, `conversion`).
    #[serde(default)]
    pub options: IndexMap<String, toml::Value>,
}

impl ParamEntry {
    /// Options rendered as strings, the form descriptors consume.
    pub fn option_strings(&self) -> IndexMap<String, String> {
        self.options
            .iter()
            .map(|(key, value)| (key.clone(), toml_value_to_string(value)))
            .collect()
    }
}

impl Manifest {
    /// Check if a function is declared.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of declared parameters across all functions.
    pub fn param_count(&self) -> usize {
        self.functions.values().map(|f| f.params.len()).sum()
    }
}
