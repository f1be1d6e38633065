//! The built-in kind catalogue.
//!
//! Each family is a single descriptor type parameterized by its intent and
//! family data. The tables in the family modules flatten kind and intent
//! into registry tags.

mod array;
mod buffer;
mod callback;
mod handle;
mod integer;
mod logical;
mod status;
mod string;

use f08gen_core::IntKind;

pub use logical::{C_FALSE, C_TRUE, decode_logical, encode_logical};

use crate::{CountRef, Import, InterfaceStyle, KindRegistry, ParamType};

pub(crate) fn register_builtin(registry: &mut KindRegistry) {
    buffer::register(registry);
    integer::register(registry);
    array::register(registry);
    handle::register(registry);
    status::register(registry);
    logical::register(registry);
    callback::register(registry);
    string::register(registry);
}

fn boxed<T: ParamType + 'static>(descriptor: T) -> Box<dyn ParamType> {
    Box::new(descriptor)
}

/// Integer width selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    /// Same width in both variants.
    Fixed(IntKind),
    /// `narrow` in the classic variant, `wide` in the big-count variant.
    Dual { narrow: IntKind, wide: IntKind },
}

impl Width {
    pub(crate) fn select(self, bigcount: bool) -> IntKind {
        match self {
            Width::Fixed(kind) => kind,
            Width::Dual { narrow, .. } if !bigcount => narrow,
            Width::Dual { wide, .. } => wide,
        }
    }
}

/// Imports needed to name `kind` in a declaration.
fn width_uses(style: &dyn InterfaceStyle, kind: IntKind) -> Vec<Import> {
    kind.kind_constant()
        .map(|constant| style.constant_imports(constant))
        .unwrap_or_default()
}

fn width_include(style: &dyn InterfaceStyle, kind: IntKind) -> Option<&'static str> {
    kind.kind_constant().and(style.constants_header())
}

/// Imports needed when the count is a named MPI constant.
fn count_uses(style: &dyn InterfaceStyle, count: Option<&CountRef>) -> Vec<Import> {
    count
        .and_then(CountRef::constant)
        .map(|constant| style.constant_imports(constant.name()))
        .unwrap_or_default()
}

fn count_include(style: &dyn InterfaceStyle, count: Option<&CountRef>) -> Option<&'static str> {
    count
        .and_then(CountRef::constant)
        .and(style.constants_header())
}

/// Explicit extent, or `*` for assumed size.
fn extent(count: Option<&CountRef>) -> String {
    count.map_or_else(|| "*".to_string(), CountRef::to_string)
}

#[cfg(test)]
mod tests {
    use f08gen_core::Mode;

    use super::*;
    use crate::style_for;

    #[test]
    fn test_width_select() {
        let dual = Width::Dual {
            narrow: IntKind::Default,
            wide: IntKind::Count,
        };
        assert_eq!(dual.select(false), IntKind::Default);
        assert_eq!(dual.select(true), IntKind::Count);
        assert_eq!(Width::Fixed(IntKind::Offset).select(true), IntKind::Offset);
    }

    #[test]
    fn test_width_imports_follow_mode() {
        let modern = style_for(Mode::Modern);
        assert_eq!(
            width_uses(modern, IntKind::Count),
            vec![Import::new("mpi_f08_types", "MPI_COUNT_KIND")]
        );
        assert!(width_uses(modern, IntKind::Default).is_empty());
        assert_eq!(width_include(modern, IntKind::Count), None);

        let legacy = style_for(Mode::Legacy);
        assert!(width_uses(legacy, IntKind::Count).is_empty());
        assert_eq!(width_include(legacy, IntKind::Count), Some("mpif-config.h"));
        assert_eq!(width_include(legacy, IntKind::Default), None);
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(None), "*");
        assert_eq!(extent(Some(&CountRef::parse("n"))), "n");
    }
}
