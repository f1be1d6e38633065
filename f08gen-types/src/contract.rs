//! The uniform contract every parameter kind implements.

use std::fmt;

use f08gen_core::{api_name, tmp_name, tmp_name2};
use serde::Serialize;

use crate::Param;

/// A `USE <module>, ONLY: <symbol>` requirement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Import {
    pub module: String,
    pub symbol: String,
}

impl Import {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USE {}, ONLY: {}", self.module, self.symbol)
    }
}

/// Text fragments for one parameter of one generated variant.
///
/// Fragments are queried in pipeline order: predeclare, uses and include,
/// the two declarations, temporaries, pre-call conversion, call argument,
/// post-call conversion. A driver may call each operation any number of
/// times; only [`ParamType::tmp_counter`] changes state.
pub trait ParamType: fmt::Debug + Send {
    /// Shared descriptor state.
    fn param(&self) -> &Param;

    fn param_mut(&mut self) -> &mut Param;

    /// Directive emitted before the interface declaration.
    fn interface_predeclare(&self) -> Option<String> {
        None
    }

    /// Declaration in the user-visible subroutine.
    fn declare(&self) -> String;

    /// Declaration in the Fortran shim that calls into C.
    fn declare_cbinding_fortran(&self) -> String {
        self.declare()
    }

    /// Declaration of the conversion temporaries, if any.
    fn declare_tmp(&self) -> Option<String> {
        None
    }

    /// Local names introduced by [`ParamType::declare_tmp`].
    fn local_names(&self) -> Vec<String> {
        match self.declare_tmp() {
            Some(_) => vec![self.tmp_name()],
            None => Vec::new(),
        }
    }

    /// Expression passed to the C entry point.
    fn argument(&self) -> String {
        self.param().name().to_string()
    }

    /// Module imports needed by the declarations.
    fn uses(&self) -> Vec<Import> {
        Vec::new()
    }

    /// Legacy header to include.
    fn include(&self) -> Option<&'static str> {
        None
    }

    /// Statements run before the C call.
    fn pre_c_call(&self) -> Option<String> {
        None
    }

    /// Statements run after the C call.
    fn post(&self) -> Option<String> {
        None
    }

    /// Parameter declaration in the C prototype.
    fn c_parameter(&self) -> String;

    /// Whether the declaration fell back to an assumed size `(*)` or
    /// length `*` because no count was given.
    fn assumed_size(&self) -> bool {
        false
    }

    fn fn_api_name(&self) -> String {
        let param = self.param();
        api_name(param.fn_name(), param.bigcount())
    }

    fn tmp_name(&self) -> String {
        tmp_name(self.param().name())
    }

    fn tmp_name2(&self) -> String {
        tmp_name2(self.param().name())
    }

    /// Hand out a fresh loop counter name.
    fn tmp_counter(&mut self) -> String {
        self.param_mut().next_counter()
    }
}
