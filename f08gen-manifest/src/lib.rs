//! Parsing and validation of `bindings.toml` signature manifests.
//!
//! A manifest selects the interface mode and lists, per MPI function, the
//! ordered parameter descriptors the generator binds:
//!
//! ```toml
//! [generator]
//! mode = "modern"
//!
//! [functions.send]
//! bigcount = true
//! params = [
//!   { kind = "BUFFER", name = "buf" },
//!   { kind = "COUNT", name = "count" },
//! ]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BindingsToml, FunctionEntry, GeneratorConfig, Manifest, ParamEntry, parse_manifest,
};
pub use validate::ParseContext;
