//! Core operations.
//!
//! This module contains the business logic for f08gen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod kinds;
pub mod plan;
pub mod show;

pub use check::check;
pub use kinds::kinds;
pub use plan::function_specs;
pub use show::{Selection, show};
