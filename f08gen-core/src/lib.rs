//! Core vocabulary for the f08gen binding generator.
//!
//! This crate provides the small, dependency-free building blocks shared by
//! the kind catalogue and the manifest: argument intents, interface modes,
//! integer widths, named MPI constants and the naming helpers that derive
//! temporary and API names from a parameter.

mod constants;
mod int_kind;
mod intent;
mod mode;
mod naming;
mod utils;

// MPI vocabulary
pub use constants::{
    CONSTANTS_HEADER, ISO_C_BINDING, MPI_CALLBACKS_MODULE, MPI_TYPES_MODULE, NamedConstant,
};
pub use int_kind::IntKind;
pub use intent::Intent;
pub use mode::Mode;
// Naming helpers
pub use naming::{
    LoopCounters, MAX_IDENTIFIER_LEN, api_name, counter_name, is_fortran_identifier, tmp_name,
    tmp_name2,
};
// String utilities
pub use utils::{capitalize, toml_value_to_string};
