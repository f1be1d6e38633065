//! Scalar integers: plain values, counts, addresses, offsets and
//! displacements.

use f08gen_core::{IntKind, Intent};

use super::{Width, boxed, width_include, width_uses};
use crate::{Accepts, Decl, Import, KindRegistry, Param, ParamType};

const DEFAULT: Width = Width::Fixed(IntKind::Default);
const COUNT: Width = Width::Dual {
    narrow: IntKind::Default,
    wide: IntKind::Count,
};
const AINT_COUNT: Width = Width::Dual {
    narrow: IntKind::Address,
    wide: IntKind::Count,
};
const DISP: Width = Width::Dual {
    narrow: IntKind::Default,
    wide: IntKind::Address,
};

const INTEGERS: &[(&str, Width, Intent)] = &[
    ("INT", DEFAULT, Intent::In),
    ("INT_OUT", DEFAULT, Intent::Out),
    ("INT_INOUT", DEFAULT, Intent::InOut),
    ("RANK", DEFAULT, Intent::In),
    ("RANK_OUT", DEFAULT, Intent::Out),
    ("TAG", DEFAULT, Intent::In),
    ("INDEX_OUT", DEFAULT, Intent::Out),
    ("COUNT", COUNT, Intent::In),
    ("COUNT_OUT", COUNT, Intent::Out),
    ("COUNT_INOUT", COUNT, Intent::InOut),
    ("PARTITIONED_COUNT", Width::Fixed(IntKind::Count), Intent::In),
    ("AINT", Width::Fixed(IntKind::Address), Intent::In),
    ("AINT_OUT", Width::Fixed(IntKind::Address), Intent::Out),
    ("OFFSET", Width::Fixed(IntKind::Offset), Intent::In),
    ("OFFSET_OUT", Width::Fixed(IntKind::Offset), Intent::Out),
    ("AINT_COUNT", AINT_COUNT, Intent::In),
    ("AINT_COUNT_OUT", AINT_COUNT, Intent::Out),
    ("AINT_COUNT_INOUT", AINT_COUNT, Intent::InOut),
    ("DISP", DISP, Intent::In),
    ("DISP_OUT", DISP, Intent::Out),
];

pub(super) fn register(registry: &mut KindRegistry) {
    for &(tag, width, intent) in INTEGERS {
        registry.define(tag.to_string(), move |tag, args| {
            let param = Param::new(tag, args, Accepts::SCALAR)?;
            let kind = width.select(param.bigcount());
            Ok(boxed(IntegerType {
                param,
                kind,
                intent,
            }))
        });
    }
}

/// An integer passed by reference.
///
/// The width is fixed when the descriptor is built, so the classic and
/// big-count variants of a function are separate descriptors.
#[derive(Debug, Clone)]
struct IntegerType {
    param: Param,
    kind: IntKind,
    intent: Intent,
}

impl ParamType for IntegerType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        Decl::new(self.kind.fortran_type(), self.param.name())
            .intent(self.intent)
            .to_string()
    }

    fn uses(&self) -> Vec<Import> {
        width_uses(self.param.style(), self.kind)
    }

    fn include(&self) -> Option<&'static str> {
        width_include(self.param.style(), self.kind)
    }

    fn c_parameter(&self) -> String {
        format!("{} *{}", self.kind.c_type(), self.param.name())
    }
}
