//! Binding plans: every descriptor of one function variant.

use std::collections::HashSet;

use f08gen_core::{MAX_IDENTIFIER_LEN, Mode, api_name};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    Diagnostic, Error, ImportCollector, KindRegistry, ParamArgs, ParamFragments, ParamType,
    Result,
};

/// One parameter of a function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSpec {
    pub kind: String,
    pub name: String,
    pub count: Option<String>,
    pub options: IndexMap<String, String>,
}

impl ParamSpec {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Base name, e.g. `comm_rank`.
    pub name: String,
    /// Whether a big-count variant exists alongside the classic one.
    pub bigcount: bool,
    pub params: Vec<ParamSpec>,
}

impl FunctionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn bigcount(mut self, bigcount: bool) -> Self {
        self.bigcount = bigcount;
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// The variants to generate: classic, then big-count when enabled.
    pub fn variants(&self, mode: Mode) -> Vec<Variant> {
        let mut variants = vec![Variant::new(mode)];
        if self.bigcount {
            variants.push(Variant::new(mode).bigcount(true));
        }
        variants
    }
}

/// Selects which ABI and interface a binding targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Variant {
    pub bigcount: bool,
    pub mode: Mode,
}

impl Variant {
    pub fn new(mode: Mode) -> Self {
        Self {
            bigcount: false,
            mode,
        }
    }

    pub fn bigcount(mut self, bigcount: bool) -> Self {
        self.bigcount = bigcount;
        self
    }
}

/// Descriptors for every parameter of one function variant.
///
/// Built atomically by [`KindRegistry::bind`]: if any parameter fails,
/// no binding exists.
#[derive(Debug)]
pub struct FunctionBinding {
    function: String,
    variant: Variant,
    params: Vec<Box<dyn ParamType>>,
    diagnostics: Vec<Diagnostic>,
}

impl FunctionBinding {
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// External MPI name of this variant, e.g. `MPI_SEND_C`.
    pub fn api_name(&self) -> String {
        api_name(&self.function, self.variant.bigcount)
    }

    pub fn params(&self) -> &[Box<dyn ParamType>] {
        &self.params
    }

    /// Non-fatal findings, such as arrays declared with assumed size.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Collect the fragments of every parameter.
    pub fn fragments(&self) -> BindingFragments {
        let params: Vec<ParamFragments> = self
            .params
            .iter()
            .map(|param| ParamFragments::collect(param.as_ref()))
            .collect();

        let mut imports = ImportCollector::new();
        let mut includes = Vec::new();
        for param in &params {
            imports.extend(&param.uses);
            match param.include {
                Some(include) if !includes.contains(&include) => includes.push(include),
                _ => {}
            }
        }

        BindingFragments {
            function: self.function.clone(),
            api_name: self.api_name(),
            variant: self.variant,
            imports,
            includes,
            params,
        }
    }
}

/// Fragments of a whole function variant, ready for a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingFragments {
    pub function: String,
    pub api_name: String,
    pub variant: Variant,
    pub imports: ImportCollector,
    pub includes: Vec<&'static str>,
    pub params: Vec<ParamFragments>,
}

impl BindingFragments {
    pub fn predeclares(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter_map(|p| p.predeclare.as_deref())
    }

    pub fn declarations(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.declare.as_str())
    }

    pub fn cbinding_declarations(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.declare_cbinding.as_str())
    }

    pub fn temporaries(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter_map(|p| p.declare_tmp.as_deref())
    }

    pub fn pre_call(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter_map(|p| p.pre_c_call.as_deref())
    }

    pub fn arguments(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.argument.as_str())
    }

    pub fn post_call(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter_map(|p| p.post.as_deref())
    }

    pub fn c_parameters(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.c_parameter.as_str())
    }
}

impl KindRegistry {
    /// Construct every descriptor of `function` for `variant`.
    pub fn bind(&self, function: &FunctionSpec, variant: Variant) -> Result<FunctionBinding> {
        let mut seen = HashSet::new();
        let mut params = Vec::with_capacity(function.params.len());
        let mut diagnostics = Vec::new();

        for spec in &function.params {
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicateParam {
                    function: function.name.clone(),
                    param: spec.name.clone(),
                });
            }

            let args = ParamArgs {
                name: spec.name.clone(),
                fn_name: function.name.clone(),
                bigcount: variant.bigcount,
                count: spec.count.clone(),
                mode: variant.mode,
                options: spec.options.clone(),
            };
            let param = self.construct(&spec.kind, args)?;

            if param.assumed_size() {
                diagnostics.push(
                    Diagnostic::warning(
                        "bind",
                        format!(
                            "'{}' of kind '{}' has no count and is declared with assumed size",
                            spec.name, spec.kind
                        ),
                    )
                    .at(format!("functions.{}.{}", function.name, spec.name)),
                );
            }
            params.push(param);
        }

        // Temporaries and loop counters share the subroutine scope with the
        // parameters.
        let mut declared: HashSet<String> = seen.into_iter().map(String::from).collect();
        for param in &params {
            let name = param.param().name();
            for local in param.local_names() {
                if !declared.insert(local.clone()) {
                    return Err(Error::NameCollision {
                        function: function.name.clone(),
                        param: name.to_string(),
                        name: local,
                    });
                }
                if local.len() > MAX_IDENTIFIER_LEN {
                    diagnostics.push(
                        Diagnostic::warning(
                            "bind",
                            format!(
                                "'{}' is {} characters long, over the Fortran limit of {}",
                                local,
                                local.len(),
                                MAX_IDENTIFIER_LEN
                            ),
                        )
                        .at(format!("functions.{}.{}", function.name, name)),
                    );
                }
            }
        }

        Ok(FunctionBinding {
            function: function.name.clone(),
            variant,
            params,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send() -> FunctionSpec {
        FunctionSpec::new("send")
            .bigcount(true)
            .param(ParamSpec::new("BUFFER", "buf"))
            .param(ParamSpec::new("COUNT", "count"))
            .param(ParamSpec::new("DATATYPE", "datatype"))
            .param(ParamSpec::new("RANK", "dest"))
            .param(ParamSpec::new("TAG", "tag"))
            .param(ParamSpec::new("COMM", "comm"))
    }

    #[test]
    fn test_variants() {
        let variants = send().variants(Mode::Modern);
        assert_eq!(variants.len(), 2);
        assert!(!variants[0].bigcount);
        assert!(variants[1].bigcount);
        assert_eq!(FunctionSpec::new("barrier").variants(Mode::Legacy).len(), 1);
    }

    #[test]
    fn test_bind_send() {
        let registry = KindRegistry::builtin();
        let binding = registry
            .bind(&send(), Variant::new(Mode::Modern).bigcount(true))
            .unwrap();
        assert_eq!(binding.api_name(), "MPI_SEND_C");
        assert!(binding.diagnostics().is_empty());

        let fragments = binding.fragments();
        assert_eq!(
            fragments.arguments().collect::<Vec<_>>(),
            vec!["buf", "count", "datatype%MPI_VAL", "dest", "tag", "comm%MPI_VAL"]
        );
        assert_eq!(
            fragments.imports.render(),
            vec!["USE mpi_f08_types, ONLY: MPI_COUNT_KIND, MPI_Comm, MPI_Datatype".to_string()]
        );
        assert!(fragments.includes.is_empty());
        assert_eq!(
            fragments.c_parameters().collect::<Vec<_>>(),
            vec![
                "OMPI_CFI_BUFFER *buf",
                "MPI_Count *count",
                "MPI_Fint *datatype",
                "MPI_Fint *dest",
                "MPI_Fint *tag",
                "MPI_Fint *comm",
            ]
        );
    }

    #[test]
    fn test_legacy_includes_deduplicated() {
        let function = FunctionSpec::new("file_read_at")
            .param(ParamSpec::new("OFFSET", "offset"))
            .param(ParamSpec::new("STATUS_OUT", "status"));
        let binding = KindRegistry::builtin()
            .bind(&function, Variant::new(Mode::Legacy))
            .unwrap();
        let fragments = binding.fragments();
        assert_eq!(fragments.includes, vec!["mpif-config.h"]);
        assert!(fragments.imports.is_empty());
    }

    #[test]
    fn test_duplicate_param() {
        let function = FunctionSpec::new("send")
            .param(ParamSpec::new("COUNT", "count"))
            .param(ParamSpec::new("INT", "count"));
        let err = KindRegistry::builtin()
            .bind(&function, Variant::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateParam {
                function: "send".to_string(),
                param: "count".to_string(),
            }
        );
    }

    #[test]
    fn test_bind_is_atomic() {
        let function = FunctionSpec::new("send")
            .param(ParamSpec::new("COUNT", "count"))
            .param(ParamSpec::new("BOGUS", "x"));
        let err = KindRegistry::builtin()
            .bind(&function, Variant::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownKind {
                tag: "BOGUS".to_string(),
                function: Some("send".to_string()),
            }
        );
    }

    #[test]
    fn test_temporary_clashes_with_parameter() {
        let function = FunctionSpec::new("test")
            .param(ParamSpec::new("INT", "c_flag"))
            .param(ParamSpec::new("LOGICAL_OUT", "flag"));
        let err = KindRegistry::builtin()
            .bind(&function, Variant::default())
            .unwrap_err();
        assert_eq!(
            err,
            Error::NameCollision {
                function: "test".to_string(),
                param: "flag".to_string(),
                name: "c_flag".to_string(),
            }
        );
    }

    #[test]
    fn test_loop_counter_clashes_with_temporary() {
        // The loop counter of `c` and the temporary of `i_0` are both `c_i_0`.
        let function = FunctionSpec::new("waitall")
            .param(ParamSpec::new("INT", "n"))
            .param(
                ParamSpec::new("REQUEST_ARRAY_INOUT", "c")
                    .count("n")
                    .option("conversion", "loop"),
            )
            .param(ParamSpec::new("LOGICAL_OUT", "i_0"));
        let err = KindRegistry::builtin()
            .bind(&function, Variant::new(Mode::Modern))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NameCollision { ref name, .. } if name == "c_i_0"
        ));
    }

    #[test]
    fn test_long_temporary_warning() {
        let name = format!("f{}", "x".repeat(62));
        let function = FunctionSpec::new("test").param(ParamSpec::new("LOGICAL_OUT", &name));
        let binding = KindRegistry::builtin()
            .bind(&function, Variant::default())
            .unwrap();
        let diagnostics = binding.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("65 characters"));
    }

    #[test]
    fn test_assumed_size_warning() {
        let function = FunctionSpec::new("gatherv")
            .param(ParamSpec::new("COUNT_ARRAY", "recvcounts"))
            .param(ParamSpec::new("DISP_ARRAY", "displs").count("comm_size"));
        let binding = KindRegistry::builtin()
            .bind(&function, Variant::default())
            .unwrap();
        let diagnostics = binding.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("functions.gatherv.recvcounts")
        );
    }
}
