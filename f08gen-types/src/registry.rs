//! Registry mapping kind tags to descriptor constructors.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{Error, ParamArgs, ParamType, Result, kinds};

/// Builds a descriptor from its tag and construction arguments.
pub type Constructor =
    Arc<dyn Fn(&str, ParamArgs) -> Result<Box<dyn ParamType>> + Send + Sync + 'static>;

/// Registry of parameter kinds.
///
/// Tags are unique: registering an existing tag fails with
/// [`Error::DuplicateKind`]. Iteration follows registration order.
///
/// # Example
///
/// ```
/// use f08gen_types::{KindRegistry, ParamArgs};
///
/// let registry = KindRegistry::builtin();
/// let comm = registry.construct("COMM", ParamArgs::new("comm", "send")).unwrap();
/// assert_eq!(comm.argument(), "comm%MPI_VAL");
/// ```
#[derive(Clone, Default)]
pub struct KindRegistry {
    kinds: IndexMap<String, Constructor>,
}

impl KindRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the full kind catalogue.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        kinds::register_builtin(&mut registry);
        registry
    }

    /// Associate `tag` with a constructor.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F) -> Result<()>
    where
        F: Fn(&str, ParamArgs) -> Result<Box<dyn ParamType>> + Send + Sync + 'static,
    {
        let tag = tag.into();
        if self.kinds.contains_key(&tag) {
            return Err(Error::DuplicateKind { tag });
        }
        self.kinds.insert(tag, Arc::new(constructor));
        Ok(())
    }

    /// Register a catalogue entry. The catalogue tables never repeat a tag.
    pub(crate) fn define<F>(&mut self, tag: String, constructor: F)
    where
        F: Fn(&str, ParamArgs) -> Result<Box<dyn ParamType>> + Send + Sync + 'static,
    {
        debug_assert!(!self.kinds.contains_key(&tag), "kind {tag} defined twice");
        self.kinds.insert(tag, Arc::new(constructor));
    }

    /// Constructor registered for `tag`.
    pub fn get(&self, tag: &str) -> Result<&Constructor> {
        self.kinds.get(tag).ok_or_else(|| Error::unknown_kind(tag))
    }

    /// Construct a descriptor for `tag`.
    pub fn construct(&self, tag: &str, args: ParamArgs) -> Result<Box<dyn ParamType>> {
        let constructor = self.get(tag).map_err(|e| e.in_function(&args.fn_name))?;
        constructor(tag, args)
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.kinds.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindRegistry")
            .field("kinds", &self.kinds.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_register_fails() {
        let builtin = KindRegistry::builtin();
        let int = builtin.get("INT").unwrap().clone();

        let mut registry = KindRegistry::new();
        let first = int.clone();
        registry
            .register("MY_INT", move |tag, args| first(tag, args))
            .unwrap();
        let err = registry
            .register("MY_INT", move |tag, args| int(tag, args))
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateKind {
                tag: "MY_INT".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_builtin_rejects_redefinition() {
        let mut registry = KindRegistry::builtin();
        let result = registry.register("COMM", |tag, args| {
            KindRegistry::builtin().construct(tag, args)
        });
        assert!(matches!(result, Err(Error::DuplicateKind { .. })));
    }

    #[test]
    fn test_unknown_kind() {
        let registry = KindRegistry::builtin();
        assert!(matches!(
            registry.get("BOGUS"),
            Err(Error::UnknownKind { function: None, .. })
        ));

        let err = registry
            .construct("BOGUS", ParamArgs::new("x", "send"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownKind {
                tag: "BOGUS".to_string(),
                function: Some("send".to_string()),
            }
        );
    }

    #[test]
    fn test_registered_constructor_receives_tag() {
        let builtin = KindRegistry::builtin();
        let int = builtin.get("INT").unwrap().clone();

        let mut registry = KindRegistry::new();
        registry
            .register("ROOT", move |_, args| int("INT", args))
            .unwrap();
        let root = registry.construct("ROOT", ParamArgs::new("root", "bcast")).unwrap();
        assert_eq!(root.declare(), "INTEGER, INTENT(IN) :: root");
        assert_eq!(root.param().tag(), "INT");
    }

    #[test]
    fn test_builtin_catalogue() {
        let registry = KindRegistry::builtin();
        for tag in ["BUFFER", "COUNT", "COMM_INOUT", "LOGICAL_ARRAY_OUT", "DATAREP_EXTENT_FN"] {
            assert!(registry.contains(tag), "{tag} missing");
        }
        assert!(!registry.is_empty());
        assert_eq!(registry.tags().count(), registry.len());
    }
}
