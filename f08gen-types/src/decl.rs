//! Fortran declaration statements.

use std::fmt;

use f08gen_core::Intent;

/// A single `<type>[, <attrs>] :: <name>[(<dims>)]` statement.
///
/// # Example
///
/// ```
/// use f08gen_core::Intent;
/// use f08gen_types::Decl;
///
/// let decl = Decl::new("INTEGER", "ranks").intent(Intent::In).dims("n");
/// assert_eq!(decl.to_string(), "INTEGER, INTENT(IN) :: ranks(n)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    type_spec: String,
    name: String,
    intent: Option<Intent>,
    suffix: Option<&'static str>,
    dims: Option<String>,
}

impl Decl {
    pub fn new(type_spec: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_spec: type_spec.into(),
            name: name.into(),
            intent: None,
            suffix: None,
            dims: None,
        }
    }

    pub fn intent(self, intent: Intent) -> Self {
        self.maybe_intent(Some(intent))
    }

    pub fn maybe_intent(mut self, intent: Option<Intent>) -> Self {
        self.intent = intent;
        self
    }

    /// Attribute written after the intent without a comma, such as a
    /// preprocessor macro that may expand to nothing.
    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    pub fn when_suffix(self, cond: bool, suffix: &'static str) -> Self {
        if cond { self.suffix(suffix) } else { self }
    }

    pub fn dims(self, dims: impl Into<String>) -> Self {
        self.maybe_dims(Some(dims.into()))
    }

    pub fn maybe_dims(mut self, dims: Option<String>) -> Self {
        self.dims = dims;
        self
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_spec)?;
        if let Some(intent) = self.intent {
            write!(f, ", {}", intent.attribute())?;
        }
        if let Some(suffix) = self.suffix {
            write!(f, " {}", suffix)?;
        }
        write!(f, " :: {}", self.name)?;
        if let Some(dims) = &self.dims {
            write!(f, "({})", dims)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(Decl::new("INTEGER", "x").to_string(), "INTEGER :: x");
    }

    #[test]
    fn test_all_parts() {
        let decl = Decl::new("OMPI_F08_IGNORE_TKR_TYPE", "buf")
            .intent(Intent::In)
            .suffix("OMPI_ASYNCHRONOUS");
        assert_eq!(
            decl.to_string(),
            "OMPI_F08_IGNORE_TKR_TYPE, INTENT(IN) OMPI_ASYNCHRONOUS :: buf"
        );

        let decl = Decl::new("INTEGER", "s")
            .intent(Intent::Out)
            .dims("MPI_STATUS_SIZE");
        assert_eq!(decl.to_string(), "INTEGER, INTENT(OUT) :: s(MPI_STATUS_SIZE)");
    }

    #[test]
    fn test_conditional_suffix() {
        let decl = Decl::new("INTEGER", "a").when_suffix(false, "OMPI_ASYNCHRONOUS");
        assert_eq!(decl.to_string(), "INTEGER :: a");
    }
}
