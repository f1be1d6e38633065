//! Collected fragments and import de-duplication.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Import, ParamType};

/// Every fragment of one parameter, gathered in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamFragments {
    pub name: String,
    pub kind: String,
    pub predeclare: Option<String>,
    pub uses: Vec<Import>,
    pub include: Option<&'static str>,
    pub declare: String,
    pub declare_cbinding: String,
    pub declare_tmp: Option<String>,
    pub pre_c_call: Option<String>,
    pub argument: String,
    pub post: Option<String>,
    pub c_parameter: String,
}

impl ParamFragments {
    /// Query every contract operation of `param`.
    pub fn collect(param: &dyn ParamType) -> Self {
        let base = param.param();
        Self {
            name: base.name().to_string(),
            kind: base.tag().to_string(),
            predeclare: param.interface_predeclare(),
            uses: param.uses(),
            include: param.include(),
            declare: param.declare(),
            declare_cbinding: param.declare_cbinding_fortran(),
            declare_tmp: param.declare_tmp(),
            pre_c_call: param.pre_c_call(),
            argument: param.argument(),
            post: param.post(),
            c_parameter: param.c_parameter(),
        }
    }
}

/// Tracks `USE` imports and deduplicates them.
///
/// Modules keep first-use order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use f08gen_types::{ImportCollector, Import};
///
/// let mut imports = ImportCollector::new();
/// imports.add(&Import::new("mpi_f08_types", "MPI_Comm"));
/// imports.add(&Import::new("mpi_f08_types", "MPI_Datatype"));
/// imports.add(&Import::new("mpi_f08_types", "MPI_Comm"));
///
/// assert_eq!(
///     imports.render(),
///     vec!["USE mpi_f08_types, ONLY: MPI_Comm, MPI_Datatype".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: &Import) {
        self.imports
            .entry(import.module.clone())
            .or_default()
            .insert(import.symbol.clone());
    }

    pub fn extend<'a>(&mut self, imports: impl IntoIterator<Item = &'a Import>) {
        for import in imports {
            self.add(import);
        }
    }

    /// Iterate over modules in first-use order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One `USE <module>, ONLY: ...` statement per module.
    pub fn render(&self) -> Vec<String> {
        self.iter()
            .map(|(module, symbols)| {
                let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
                format!("USE {}, ONLY: {}", module, symbols.join(", "))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
