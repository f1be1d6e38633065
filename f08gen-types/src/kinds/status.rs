//! Status objects and arrays of them.

use f08gen_core::Intent;

use super::{boxed, count_include, count_uses, extent};
use crate::{Accepts, CountUse, Decl, Import, KindRegistry, Param, ParamType};

pub(super) fn register(registry: &mut KindRegistry) {
    let scalars = [
        ("STATUS", None),
        ("STATUS_OUT", Some(Intent::Out)),
        ("STATUS_INOUT", Some(Intent::InOut)),
    ];
    for (tag, intent) in scalars {
        registry.define(tag.to_string(), move |tag, args| {
            let param = Param::new(tag, args, Accepts::SCALAR)?;
            Ok(boxed(StatusType {
                param,
                intent,
                array: false,
            }))
        });
    }
    registry.define("STATUS_ARRAY".to_string(), |tag, args| {
        let param = Param::new(tag, args, Accepts::count(CountUse::Optional))?;
        Ok(boxed(StatusType {
            param,
            intent: Some(Intent::Out),
            array: true,
        }))
    });
}

/// `TYPE(MPI_Status)` in the modern interface, an integer array of
/// `MPI_STATUS_SIZE` in the legacy interface.
#[derive(Debug, Clone)]
struct StatusType {
    param: Param,
    intent: Option<Intent>,
    array: bool,
}

impl StatusType {
    fn extent(&self) -> Option<String> {
        self.array.then(|| extent(self.param.count()))
    }
}

impl ParamType for StatusType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        let style = self.param.style();
        let extent = self.extent();
        Decl::new(style.status_type(), self.param.name())
            .maybe_intent(self.intent)
            .maybe_dims(style.status_dims(extent.as_deref()))
            .to_string()
    }

    fn uses(&self) -> Vec<Import> {
        let style = self.param.style();
        let mut uses = style.handle_imports("MPI_Status");
        uses.extend(count_uses(style, self.param.count()));
        uses
    }

    fn include(&self) -> Option<&'static str> {
        let style = self.param.style();
        // MPI_STATUS_SIZE is always referenced in legacy mode.
        style
            .constants_header()
            .or(count_include(style, self.param.count()))
    }

    fn c_parameter(&self) -> String {
        format!("MPI_Fint *{}", self.param.name())
    }

    fn assumed_size(&self) -> bool {
        self.array && self.param.count().is_none()
    }
}
