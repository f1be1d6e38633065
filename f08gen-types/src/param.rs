//! Construction arguments and the state shared by every descriptor.

use std::fmt;

use f08gen_core::{LoopCounters, Mode, NamedConstant};
use indexmap::IndexMap;

use crate::{
    Error, Result,
    style::{InterfaceStyle, style_for},
};

/// Arguments supplied when constructing a descriptor.
///
/// # Example
///
/// ```
/// use f08gen_types::ParamArgs;
///
/// let args = ParamArgs::new("recvcounts", "gatherv")
///     .bigcount(true)
///     .count("comm_size");
/// assert_eq!(args.count.as_deref(), Some("comm_size"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamArgs {
    /// Parameter name, unique within the function.
    pub name: String,
    /// Base name of the owning function (e.g. `comm_rank`).
    pub fn_name: String,
    /// Generate the big-count variant.
    pub bigcount: bool,
    /// Name of the parameter or constant giving an extent or length.
    pub count: Option<String>,
    /// Interface being generated.
    pub mode: Mode,
    /// Extra per-kind options.
    pub options: IndexMap<String, String>,
}

impl ParamArgs {
    pub fn new(name: impl Into<String>, fn_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fn_name: fn_name.into(),
            ..Self::default()
        }
    }

    /// Select the big-count variant.
    pub fn bigcount(mut self, bigcount: bool) -> Self {
        self.bigcount = bigcount;
        self
    }

    /// Set the count reference.
    pub fn count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Set the interface mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Generate the legacy integer-handle interface.
    pub fn legacy(self) -> Self {
        self.mode(Mode::Legacy)
    }

    /// Add an extra option.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A name-based reference to an extent or length.
///
/// No existence check is made: the referenced parameter only has to be in
/// scope in the generated subroutine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CountRef {
    /// Another parameter (or any expression) of the same function.
    Name(String),
    /// An MPI constant that must be imported or included.
    Constant(NamedConstant),
}

impl CountRef {
    pub fn parse(s: &str) -> Self {
        match NamedConstant::from_name(s) {
            Some(constant) => CountRef::Constant(constant),
            None => CountRef::Name(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CountRef::Name(name) => name,
            CountRef::Constant(constant) => constant.name(),
        }
    }

    pub fn constant(&self) -> Option<NamedConstant> {
        match self {
            CountRef::Constant(constant) => Some(*constant),
            CountRef::Name(_) => None,
        }
    }
}

impl fmt::Display for CountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a kind uses the count reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountUse {
    /// Scalars: a count is a signature mistake.
    Never,
    /// Arrays and strings that fall back to assumed size.
    Optional,
    /// The generated text cannot be written without one.
    Required,
}

/// What a kind accepts at construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accepts {
    pub count: CountUse,
    pub options: &'static [&'static str],
}

impl Accepts {
    pub const SCALAR: Accepts = Accepts {
        count: CountUse::Never,
        options: &[],
    };

    pub const fn count(count: CountUse) -> Self {
        Self { count, options: &[] }
    }

    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

/// State common to every descriptor.
///
/// Holds the parameter identity, the selected variant and the interface
/// style chosen once from the mode.
#[derive(Debug, Clone)]
pub struct Param {
    tag: String,
    name: String,
    fn_name: String,
    bigcount: bool,
    count: Option<CountRef>,
    options: IndexMap<String, String>,
    style: &'static dyn InterfaceStyle,
    counters: LoopCounters,
}

impl Param {
    /// Validate `args` against what the kind accepts.
    pub(crate) fn new(tag: &str, args: ParamArgs, accepts: Accepts) -> Result<Self> {
        let count = args.count.as_deref().map(CountRef::parse);

        match (accepts.count, &count) {
            (CountUse::Required, None) => {
                return Err(Error::MissingCount {
                    tag: tag.to_string(),
                    param: args.name,
                });
            }
            (CountUse::Never, Some(count)) => {
                return Err(Error::InvalidVariant {
                    tag: tag.to_string(),
                    param: args.name,
                    reason: format!("kind takes no count, got '{}'", count),
                });
            }
            _ => {}
        }

        if let Some(key) = args
            .options
            .keys()
            .find(|key| !accepts.options.contains(&key.as_str()))
        {
            return Err(Error::InvalidVariant {
                tag: tag.to_string(),
                reason: format!("unknown option '{}'", key),
                param: args.name,
            });
        }

        Ok(Self {
            tag: tag.to_string(),
            name: args.name,
            fn_name: args.fn_name,
            bigcount: args.bigcount,
            count,
            options: args.options,
            style: style_for(args.mode),
            counters: LoopCounters::new(),
        })
    }

    /// Registry tag this descriptor was built from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fn_name(&self) -> &str {
        &self.fn_name
    }

    pub fn bigcount(&self) -> bool {
        self.bigcount
    }

    pub fn count(&self) -> Option<&CountRef> {
        self.count.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.style.mode()
    }

    pub fn style(&self) -> &'static dyn InterfaceStyle {
        self.style
    }

    /// Hand out the next loop counter name.
    pub fn next_counter(&mut self) -> String {
        self.counters.next_name(&self.name)
    }

    /// Raw value of an extra option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Boolean option, `false` when absent.
    pub(crate) fn flag(&self, key: &str) -> Result<bool> {
        match self.option(key) {
            None => Ok(false),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(other) => Err(self.invalid(format!(
                "option '{}' must be true or false, got '{}'",
                key, other
            ))),
        }
    }

    /// Build an invalid variant error for this parameter.
    pub(crate) fn invalid(&self, reason: impl Into<String>) -> Error {
        Error::InvalidVariant {
            tag: self.tag.clone(),
            param: self.name.clone(),
            reason: reason.into(),
        }
    }
}
