//! Fortran argument intents.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Direction of a dummy argument.
///
/// Every kind family takes one of these instead of defining a separate type
/// per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    In,
    Out,
    InOut,
}

impl Intent {
    /// Keyword used inside `INTENT(...)`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::In => "IN",
            Intent::Out => "OUT",
            Intent::InOut => "INOUT",
        }
    }

    /// The full attribute, e.g. `INTENT(INOUT)`.
    pub fn attribute(&self) -> String {
        format!("INTENT({})", self.as_str())
    }

    /// Whether the caller's value flows into the call.
    pub fn reads(&self) -> bool {
        matches!(self, Intent::In | Intent::InOut)
    }

    /// Whether the callee's value flows back out of the call.
    pub fn writes(&self) -> bool {
        matches!(self, Intent::Out | Intent::InOut)
    }

    /// Tag suffix used by the kind catalogue (`""`, `"_OUT"`, `"_INOUT"`).
    pub fn tag_suffix(&self) -> &'static str {
        match self {
            Intent::In => "",
            Intent::Out => "_OUT",
            Intent::InOut => "_INOUT",
        }
    }

    pub const ALL: [Intent; 3] = [Intent::In, Intent::Out, Intent::InOut];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Intent::In),
            "out" => Ok(Intent::Out),
            "inout" => Ok(Intent::InOut),
            _ => Err(format!("invalid intent '{}', expected in, out or inout", s)),
        }
    }
}
