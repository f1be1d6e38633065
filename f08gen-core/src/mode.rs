//! Interface generation modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which Fortran interface is being generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// The strongly-typed `mpi_f08` interface.
    #[default]
    Modern,
    /// The integer-handle `mpif.h` / `use mpi` interface.
    Legacy,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Modern => "modern",
            Mode::Legacy => "legacy",
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Mode::Legacy)
    }

    pub const ALL: [Mode; 2] = [Mode::Modern, Mode::Legacy];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" | "f08" => Ok(Mode::Modern),
            "legacy" | "f90" => Ok(Mode::Legacy),
            _ => Err(format!("invalid mode '{}', expected 'modern' or 'legacy'", s)),
        }
    }
}
