use miette::Diagnostic;
use thiserror::Error;

/// Result type for descriptor construction and binding.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("unknown parameter kind '{tag}'{}", function_suffix(.function))]
    #[diagnostic(
        code(f08gen::unknown_kind),
        help("run 'f08gen kinds' to list the registered kinds")
    )]
    UnknownKind {
        tag: String,
        function: Option<String>,
    },

    #[error("parameter kind '{tag}' is already registered")]
    #[diagnostic(code(f08gen::duplicate_kind))]
    DuplicateKind { tag: String },

    #[error("parameter '{param}' of kind '{tag}' needs a count")]
    #[diagnostic(
        code(f08gen::missing_count),
        help("set `count` to the name of the parameter holding the length, or to an MPI constant")
    )]
    MissingCount { tag: String, param: String },

    #[error("invalid use of kind '{tag}' for parameter '{param}': {reason}")]
    #[diagnostic(code(f08gen::invalid_variant))]
    InvalidVariant {
        tag: String,
        param: String,
        reason: String,
    },

    #[error("duplicate parameter '{param}' in function '{function}'")]
    #[diagnostic(code(f08gen::duplicate_param))]
    DuplicateParam { function: String, param: String },

    #[error("temporary '{name}' of parameter '{param}' clashes with another name in function '{function}'")]
    #[diagnostic(
        code(f08gen::name_collision),
        help("rename the parameter; temporaries are named c_<name> and loop counters <name>_i_<n>")
    )]
    NameCollision {
        function: String,
        param: String,
        name: String,
    },
}

fn function_suffix(function: &Option<String>) -> String {
    match function {
        Some(name) => format!(" in function '{}'", name),
        None => String::new(),
    }
}

impl Error {
    /// Create an unknown kind error for a lookup outside any function.
    pub fn unknown_kind(tag: impl Into<String>) -> Self {
        Error::UnknownKind {
            tag: tag.into(),
            function: None,
        }
    }

    /// Attach the owning function to an unknown kind error.
    pub fn in_function(self, function: &str) -> Self {
        match self {
            Error::UnknownKind { tag, function: None } => Error::UnknownKind {
                tag,
                function: Some(function.to_string()),
            },
            other => other,
        }
    }
}
