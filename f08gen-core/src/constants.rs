//! Module names and named MPI constants referenced by generated code.

use serde::Serialize;

/// Module providing `mpi_f08` derived types and kind constants.
pub const MPI_TYPES_MODULE: &str = "mpi_f08_types";

/// Module providing the abstract interfaces of user callbacks.
pub const MPI_CALLBACKS_MODULE: &str = "mpi_f08_interfaces_callbacks";

/// Intrinsic C interoperability module.
pub const ISO_C_BINDING: &str = "iso_c_binding";

/// Header that defines kind and size constants for the legacy interface.
pub const CONSTANTS_HEADER: &str = "mpif-config.h";

/// A compile-time constant that may appear where a count is expected.
///
/// Array extents and string lengths are usually the name of another
/// parameter, but a handful of fixed sizes come from MPI itself. Those need
/// an import (or, in legacy mode, a header) to be in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NamedConstant {
    StatusSize,
    MaxObjectName,
    MaxPortName,
    MaxErrorString,
    MaxProcessorName,
    MaxLibraryVersionString,
    MaxInfoKey,
    MaxInfoVal,
    MaxDatarepString,
    MaxPsetNameLen,
    MaxStringtagLen,
}

impl NamedConstant {
    pub const ALL: [NamedConstant; 11] = [
        NamedConstant::StatusSize,
        NamedConstant::MaxObjectName,
        NamedConstant::MaxPortName,
        NamedConstant::MaxErrorString,
        NamedConstant::MaxProcessorName,
        NamedConstant::MaxLibraryVersionString,
        NamedConstant::MaxInfoKey,
        NamedConstant::MaxInfoVal,
        NamedConstant::MaxDatarepString,
        NamedConstant::MaxPsetNameLen,
        NamedConstant::MaxStringtagLen,
    ];

    /// The Fortran spelling of the constant.
    pub fn name(&self) -> &'static str {
        match self {
            NamedConstant::StatusSize => "MPI_STATUS_SIZE",
            NamedConstant::MaxObjectName => "MPI_MAX_OBJECT_NAME",
            NamedConstant::MaxPortName => "MPI_MAX_PORT_NAME",
            NamedConstant::MaxErrorString => "MPI_MAX_ERROR_STRING",
            NamedConstant::MaxProcessorName => "MPI_MAX_PROCESSOR_NAME",
            NamedConstant::MaxLibraryVersionString => "MPI_MAX_LIBRARY_VERSION_STRING",
            NamedConstant::MaxInfoKey => "MPI_MAX_INFO_KEY",
            NamedConstant::MaxInfoVal => "MPI_MAX_INFO_VAL",
            NamedConstant::MaxDatarepString => "MPI_MAX_DATAREP_STRING",
            NamedConstant::MaxPsetNameLen => "MPI_MAX_PSET_NAME_LEN",
            NamedConstant::MaxStringtagLen => "MPI_MAX_STRINGTAG_LEN",
        }
    }

    /// Look up a constant by name. Fortran names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}
