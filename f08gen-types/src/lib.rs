//! Parameter kinds and Fortran/C fragment emission for MPI bindings.
//!
//! Every MPI entry point is exposed twice, through the typed `mpi_f08`
//! interface and through the legacy integer-handle interface, and both
//! forward to a C shim that only accepts primitive arguments. This crate
//! describes each parameter by a *kind* and emits the text needed on each
//! side of that boundary.
//!
//! # Module Organization
//!
//! - [`KindRegistry`] - tag to constructor lookup, pre-populated by
//!   [`KindRegistry::builtin`]
//! - [`ParamType`] - the per-kind fragment contract
//! - [`InterfaceStyle`] - modern versus legacy spelling rules
//! - [`FunctionBinding`] - all descriptors of one function variant
//! - [`ParamFragments`] / [`BindingFragments`] - collected output
//!
//! # Example
//!
//! ```
//! use f08gen_types::{FunctionSpec, KindRegistry, ParamSpec, Variant};
//! use f08gen_core::Mode;
//!
//! let registry = KindRegistry::builtin();
//! let rank = FunctionSpec::new("comm_rank")
//!     .param(ParamSpec::new("COMM", "comm"))
//!     .param(ParamSpec::new("RANK_OUT", "rank"));
//!
//! let binding = registry.bind(&rank, Variant::new(Mode::Modern)).unwrap();
//! let fragments = binding.fragments();
//! assert_eq!(fragments.api_name, "MPI_COMM_RANK");
//! assert_eq!(
//!     fragments.arguments().collect::<Vec<_>>(),
//!     vec!["comm%MPI_VAL", "rank"]
//! );
//! ```

mod binding;
mod contract;
mod decl;
mod diagnostic;
mod error;
mod fragments;
mod kinds;
mod param;
mod registry;
mod style;

pub use binding::{BindingFragments, FunctionBinding, FunctionSpec, ParamSpec, Variant};
pub use contract::{Import, ParamType};
pub use decl::Decl;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use fragments::{ImportCollector, ParamFragments};
pub use kinds::{C_FALSE, C_TRUE, decode_logical, encode_logical};
pub use param::{CountRef, Param, ParamArgs};
pub use registry::{Constructor, KindRegistry};
pub use style::{InterfaceStyle, LegacyStyle, ModernStyle, style_for};

pub(crate) use param::{Accepts, CountUse};
