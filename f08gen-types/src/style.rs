//! Interface styles: modern `mpi_f08` versus legacy integer handles.
//!
//! The mode is resolved into one of these strategies when a descriptor is
//! constructed. Kind families ask the style how to spell handles, callbacks
//! and constant imports instead of branching on the mode themselves.

use std::fmt;

use f08gen_core::{CONSTANTS_HEADER, ISO_C_BINDING, MPI_CALLBACKS_MODULE, MPI_TYPES_MODULE, Mode};

use crate::Import;

/// Mode-dependent spelling rules.
pub trait InterfaceStyle: fmt::Debug + Send + Sync {
    /// The mode this style implements.
    fn mode(&self) -> Mode;

    /// Type specifier for a handle in the visible interface.
    fn handle_type(&self, type_name: &str) -> String;

    /// Expression yielding the raw integer of a scalar handle.
    fn handle_value(&self, name: &str) -> String;

    /// Expression yielding the raw integers of a whole handle array.
    fn handle_array_value(&self, name: &str) -> String;

    /// Whether handles are wrapped and need converting element by element.
    fn wraps_handles(&self) -> bool;

    /// Imports needed to name a handle type.
    fn handle_imports(&self, type_name: &str) -> Vec<Import>;

    /// Imports needed to reference a named MPI constant.
    fn constant_imports(&self, constant: &str) -> Vec<Import>;

    /// Header providing MPI constants, when constants come from a header.
    fn constants_header(&self) -> Option<&'static str>;

    /// Declaration of a user procedure argument.
    fn procedure_declaration(&self, interface: &str, name: &str) -> String;

    /// Imports needed to declare and capture a user procedure.
    fn procedure_imports(&self, interface: &str) -> Vec<Import>;

    /// Type specifier for a status object.
    fn status_type(&self) -> &'static str;

    /// Dimensions of a status declaration, given the array extent if any.
    fn status_dims(&self, extent: Option<&str>) -> Option<String>;
}

/// The strongly-typed `mpi_f08` interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernStyle;

/// The integer-handle `mpif.h` / `use mpi` interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyStyle;

/// Resolve a mode to its style.
pub fn style_for(mode: Mode) -> &'static dyn InterfaceStyle {
    match mode {
        Mode::Modern => &ModernStyle,
        Mode::Legacy => &LegacyStyle,
    }
}

fn funptr_imports() -> Vec<Import> {
    vec![
        Import::new(ISO_C_BINDING, "c_funloc"),
        Import::new(ISO_C_BINDING, "c_funptr"),
    ]
}

impl InterfaceStyle for ModernStyle {
    fn mode(&self) -> Mode {
        Mode::Modern
    }

    fn handle_type(&self, type_name: &str) -> String {
        format!("TYPE({})", type_name)
    }

    fn handle_value(&self, name: &str) -> String {
        format!("{}%MPI_VAL", name)
    }

    fn handle_array_value(&self, name: &str) -> String {
        format!("{}(:)%MPI_VAL", name)
    }

    fn wraps_handles(&self) -> bool {
        true
    }

    fn handle_imports(&self, type_name: &str) -> Vec<Import> {
        vec![Import::new(MPI_TYPES_MODULE, type_name)]
    }

    fn constant_imports(&self, constant: &str) -> Vec<Import> {
        vec![Import::new(MPI_TYPES_MODULE, constant)]
    }

    fn constants_header(&self) -> Option<&'static str> {
        None
    }

    fn procedure_declaration(&self, interface: &str, name: &str) -> String {
        format!("PROCEDURE({}) :: {}", interface, name)
    }

    fn procedure_imports(&self, interface: &str) -> Vec<Import> {
        let mut imports = vec![Import::new(MPI_CALLBACKS_MODULE, interface)];
        imports.extend(funptr_imports());
        imports
    }

    fn status_type(&self) -> &'static str {
        "TYPE(MPI_Status)"
    }

    fn status_dims(&self, extent: Option<&str>) -> Option<String> {
        extent.map(str::to_string)
    }
}

impl InterfaceStyle for LegacyStyle {
    fn mode(&self) -> Mode {
        Mode::Legacy
    }

    fn handle_type(&self, _type_name: &str) -> String {
        "INTEGER".to_string()
    }

    fn handle_value(&self, name: &str) -> String {
        name.to_string()
    }

    fn handle_array_value(&self, name: &str) -> String {
        name.to_string()
    }

    fn wraps_handles(&self) -> bool {
        false
    }

    fn handle_imports(&self, _type_name: &str) -> Vec<Import> {
        Vec::new()
    }

    fn constant_imports(&self, _constant: &str) -> Vec<Import> {
        Vec::new()
    }

    fn constants_header(&self) -> Option<&'static str> {
        Some(CONSTANTS_HEADER)
    }

    fn procedure_declaration(&self, _interface: &str, name: &str) -> String {
        format!("EXTERNAL :: {}", name)
    }

    // The abstract interfaces live in an mpi_f08 module, so only the
    // interoperability helpers are imported.
    fn procedure_imports(&self, _interface: &str) -> Vec<Import> {
        funptr_imports()
    }

    fn status_type(&self) -> &'static str {
        "INTEGER"
    }

    fn status_dims(&self, extent: Option<&str>) -> Option<String> {
        Some(match extent {
            Some(extent) => format!("MPI_STATUS_SIZE,{}", extent),
            None => "MPI_STATUS_SIZE".to_string(),
        })
    }
}
