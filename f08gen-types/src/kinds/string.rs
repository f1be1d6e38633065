//! Character strings.

use f08gen_core::{ISO_C_BINDING, Intent};

use super::{boxed, count_include, count_uses, extent};
use crate::{Accepts, CountUse, Decl, Import, KindRegistry, Param, ParamType};

pub(super) fn register(registry: &mut KindRegistry) {
    registry.define("CHAR_ARRAY".to_string(), |tag, args| {
        let param = Param::new(tag, args, Accepts::SCALAR)?;
        Ok(boxed(StringType {
            param,
            intent: Intent::In,
        }))
    });
    registry.define("CHAR_ARRAY_OUT".to_string(), |tag, args| {
        let param = Param::new(tag, args, Accepts::count(CountUse::Optional))?;
        Ok(boxed(StringType {
            param,
            intent: Intent::Out,
        }))
    });
}

/// A string. Input strings are NUL-terminated for C; output strings are
/// filled by C up to their declared length.
#[derive(Debug, Clone)]
struct StringType {
    param: Param,
    intent: Intent,
}

impl ParamType for StringType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        let len = extent(self.param.count());
        Decl::new(format!("CHARACTER(LEN={})", len), self.param.name())
            .intent(self.intent)
            .to_string()
    }

    fn declare_cbinding_fortran(&self) -> String {
        Decl::new("CHARACTER(KIND=C_CHAR)", self.param.name())
            .intent(self.intent)
            .dims("*")
            .to_string()
    }

    fn argument(&self) -> String {
        match self.intent {
            Intent::In => format!("{}//c_null_char", self.param.name()),
            _ => self.param.name().to_string(),
        }
    }

    fn uses(&self) -> Vec<Import> {
        let mut uses = vec![Import::new(ISO_C_BINDING, "c_char")];
        if self.intent.reads() {
            uses.push(Import::new(ISO_C_BINDING, "c_null_char"));
        }
        uses.extend(count_uses(self.param.style(), self.param.count()));
        uses
    }

    fn include(&self) -> Option<&'static str> {
        count_include(self.param.style(), self.param.count())
    }

    fn c_parameter(&self) -> String {
        format!("char *{}", self.param.name())
    }

    fn assumed_size(&self) -> bool {
        self.intent.writes() && self.param.count().is_none()
    }
}
