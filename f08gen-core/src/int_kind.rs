//! Integer widths used on either side of the binding.

use serde::Serialize;

/// The integer representation of a count-like or address-like value.
///
/// Each width has a Fortran spelling (a kind parameter) and a C spelling
/// (the primitive the shim receives a pointer to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntKind {
    /// Default `INTEGER`, `MPI_Fint` in C.
    Default,
    /// `MPI_COUNT_KIND`, `MPI_Count` in C.
    Count,
    /// `MPI_ADDRESS_KIND`, `MPI_Aint` in C.
    Address,
    /// `MPI_OFFSET_KIND`, `MPI_Offset` in C.
    Offset,
}

impl IntKind {
    /// The kind constant that must be in scope, if any.
    pub fn kind_constant(&self) -> Option<&'static str> {
        match self {
            IntKind::Default => None,
            IntKind::Count => Some("MPI_COUNT_KIND"),
            IntKind::Address => Some("MPI_ADDRESS_KIND"),
            IntKind::Offset => Some("MPI_OFFSET_KIND"),
        }
    }

    /// Fortran type specifier, e.g. `INTEGER(KIND=MPI_COUNT_KIND)`.
    pub fn fortran_type(&self) -> String {
        match self.kind_constant() {
            Some(kind) => format!("INTEGER(KIND={})", kind),
            None => "INTEGER".to_string(),
        }
    }

    /// C primitive type name.
    pub fn c_type(&self) -> &'static str {
        match self {
            IntKind::Default => "MPI_Fint",
            IntKind::Count => "MPI_Count",
            IntKind::Address => "MPI_Aint",
            IntKind::Offset => "MPI_Offset",
        }
    }

    /// Whether this is wider than the default integer.
    pub fn is_wide(&self) -> bool {
        !matches!(self, IntKind::Default)
    }
}
