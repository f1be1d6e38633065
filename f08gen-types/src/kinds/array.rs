//! Integer arrays and handle arrays.

use f08gen_core::{IntKind, Intent};

use super::{Width, boxed, count_include, count_uses, extent, width_include, width_uses};
use crate::{
    Accepts, CountUse, Decl, Error, Import, KindRegistry, Param, ParamArgs, ParamType, Result,
};

const ASYNCHRONOUS: &str = "asynchronous";
const CONVERSION: &str = "conversion";

/// Tag, width, intent, always asynchronous.
const INT_ARRAYS: &[(&str, Width, Intent, bool)] = &[
    ("INT_ARRAY", Width::Fixed(IntKind::Default), Intent::In, false),
    ("INT_ARRAY_OUT", Width::Fixed(IntKind::Default), Intent::Out, false),
    ("INT_ARRAY_INOUT", Width::Fixed(IntKind::Default), Intent::InOut, false),
    (
        "COUNT_ARRAY",
        Width::Dual {
            narrow: IntKind::Default,
            wide: IntKind::Count,
        },
        Intent::In,
        false,
    ),
    (
        "AINT_COUNT_ARRAY",
        Width::Dual {
            narrow: IntKind::Address,
            wide: IntKind::Count,
        },
        Intent::In,
        false,
    ),
    ("AINT_ARRAY", Width::Fixed(IntKind::Address), Intent::In, true),
    (
        "DISP_ARRAY",
        Width::Dual {
            narrow: IntKind::Default,
            wide: IntKind::Address,
        },
        Intent::In,
        false,
    ),
];

const HANDLE_ARRAYS: &[(&str, &str, Intent)] = &[
    ("DATATYPE_ARRAY", "MPI_Datatype", Intent::In),
    ("REQUEST_ARRAY", "MPI_Request", Intent::In),
    ("REQUEST_ARRAY_INOUT", "MPI_Request", Intent::InOut),
];

pub(super) fn register(registry: &mut KindRegistry) {
    for &(tag, width, intent, always_async) in INT_ARRAYS {
        registry.define(tag.to_string(), move |tag, args| {
            let accepts = Accepts::count(CountUse::Optional).options(&[ASYNCHRONOUS]);
            let param = Param::new(tag, args, accepts)?;
            let asynchronous = always_async || param.flag(ASYNCHRONOUS)?;
            let kind = width.select(param.bigcount());
            Ok(boxed(IntArrayType {
                param,
                kind,
                intent,
                asynchronous,
            }))
        });
    }
    for &(tag, type_name, intent) in HANDLE_ARRAYS {
        registry.define(tag.to_string(), move |tag, args| {
            HandleArrayType::new(tag, args, type_name, intent).map(boxed)
        });
    }
}

/// An integer array of a fixed or count-dependent width.
#[derive(Debug, Clone)]
struct IntArrayType {
    param: Param,
    kind: IntKind,
    intent: Intent,
    asynchronous: bool,
}

impl ParamType for IntArrayType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        Decl::new(self.kind.fortran_type(), self.param.name())
            .intent(self.intent)
            .when_suffix(self.asynchronous, "OMPI_ASYNCHRONOUS")
            .dims(extent(self.param.count()))
            .to_string()
    }

    fn uses(&self) -> Vec<Import> {
        let style = self.param.style();
        let mut uses = width_uses(style, self.kind);
        uses.extend(count_uses(style, self.param.count()));
        uses
    }

    fn include(&self) -> Option<&'static str> {
        let style = self.param.style();
        width_include(style, self.kind).or(count_include(style, self.param.count()))
    }

    fn c_parameter(&self) -> String {
        format!("{} *{}", self.kind.c_type(), self.param.name())
    }

    fn assumed_size(&self) -> bool {
        self.param.count().is_none()
    }
}

/// How wrapped handles reach the integer array the shim expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    /// Pass the `MPI_VAL` component of the whole array section.
    Projection,
    /// Copy element by element through an integer temporary.
    Loop,
}

#[derive(Debug, Clone)]
struct HandleArrayType {
    param: Param,
    type_name: &'static str,
    intent: Intent,
    conversion: Conversion,
    /// Loop counter, allocated once so every fragment names the same one.
    counter: Option<String>,
}

impl HandleArrayType {
    fn new(tag: &str, args: ParamArgs, type_name: &'static str, intent: Intent) -> Result<Self> {
        let accepts = Accepts::count(CountUse::Optional).options(&[CONVERSION]);
        let mut param = Param::new(tag, args, accepts)?;

        let conversion = match param.option(CONVERSION) {
            None | Some("projection") => Conversion::Projection,
            Some("loop") => Conversion::Loop,
            Some(other) => {
                return Err(param.invalid(format!(
                    "option 'conversion' must be projection or loop, got '{}'",
                    other
                )));
            }
        };

        // A section or a loop over wrapped handles needs an upper bound.
        let needs_count = conversion == Conversion::Loop || param.style().wraps_handles();
        if needs_count && param.count().is_none() {
            return Err(Error::MissingCount {
                tag: param.tag().to_string(),
                param: param.name().to_string(),
            });
        }

        let counter = (conversion == Conversion::Loop && param.style().wraps_handles())
            .then(|| param.next_counter());

        Ok(Self {
            param,
            type_name,
            intent,
            conversion,
            counter,
        })
    }

    fn looped(&self, body: impl Fn(&str) -> String) -> Option<String> {
        let counter = self.counter.as_deref()?;
        let count = self.param.count()?;
        Some(format!(
            "DO {counter} = 1, {count}\n   {}\nEND DO",
            body(counter)
        ))
    }
}

impl ParamType for HandleArrayType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        let style = self.param.style();
        Decl::new(style.handle_type(self.type_name), self.param.name())
            .intent(self.intent)
            .dims(extent(self.param.count()))
            .to_string()
    }

    fn declare_cbinding_fortran(&self) -> String {
        Decl::new("INTEGER", self.param.name())
            .intent(self.intent)
            .dims(extent(self.param.count()))
            .to_string()
    }

    fn declare_tmp(&self) -> Option<String> {
        let counter = self.counter.as_deref()?;
        let tmp = Decl::new("INTEGER", self.tmp_name()).dims(extent(self.param.count()));
        Some(format!("{}\n{}", tmp, Decl::new("INTEGER", counter)))
    }

    fn local_names(&self) -> Vec<String> {
        match &self.counter {
            Some(counter) => vec![self.tmp_name(), counter.clone()],
            None => Vec::new(),
        }
    }

    fn argument(&self) -> String {
        let style = self.param.style();
        match (self.conversion, &self.counter) {
            (Conversion::Loop, Some(_)) => self.tmp_name(),
            _ => style.handle_array_value(self.param.name()),
        }
    }

    fn uses(&self) -> Vec<Import> {
        let style = self.param.style();
        let mut uses = style.handle_imports(self.type_name);
        uses.extend(count_uses(style, self.param.count()));
        uses
    }

    fn include(&self) -> Option<&'static str> {
        count_include(self.param.style(), self.param.count())
    }

    fn pre_c_call(&self) -> Option<String> {
        if !self.intent.reads() {
            return None;
        }
        let name = self.param.name();
        let tmp = self.tmp_name();
        self.looped(|i| format!("{tmp}({i}) = {name}({i})%MPI_VAL"))
    }

    fn post(&self) -> Option<String> {
        if !self.intent.writes() {
            return None;
        }
        let name = self.param.name();
        let tmp = self.tmp_name();
        self.looped(|i| format!("{name}({i})%MPI_VAL = {tmp}({i})"))
    }

    fn c_parameter(&self) -> String {
        format!("MPI_Fint *{}", self.param.name())
    }

    fn assumed_size(&self) -> bool {
        self.param.count().is_none()
    }
}
