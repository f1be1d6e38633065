//! Choice buffers and raw C pointers.

use f08gen_core::{ISO_C_BINDING, Intent};

use super::boxed;
use crate::{Accepts, Decl, Import, KindRegistry, Param, ParamArgs, ParamType, Result};

const ASYNCHRONOUS: &str = "asynchronous";

/// Send buffers carry `INTENT(IN)`; receive buffers carry no intent.
const BUFFERS: &[(&str, Option<Intent>, bool)] = &[
    ("BUFFER", Some(Intent::In), false),
    ("BUFFER_ASYNC", Some(Intent::In), true),
    ("BUFFER_OUT", None, false),
    ("BUFFER_ASYNC_OUT", None, true),
    ("VBUFFER", Some(Intent::In), false),
    ("VBUFFER_OUT", None, false),
    ("WBUFFER", Some(Intent::In), false),
    ("WBUFFER_OUT", None, false),
];

pub(super) fn register(registry: &mut KindRegistry) {
    for &(tag, intent, asynchronous) in BUFFERS {
        registry.define(tag.to_string(), move |tag, args| {
            BufferType::new(tag, args, intent, asynchronous).map(boxed)
        });
    }
    registry.define("C_PTR_OUT".to_string(), |tag, args| {
        Param::new(tag, args, Accepts::SCALAR).map(|param| boxed(CPtrType { param }))
    });
}

/// Assumed-type buffer passed through to a CFI descriptor.
#[derive(Debug, Clone)]
struct BufferType {
    param: Param,
    intent: Option<Intent>,
    asynchronous: bool,
}

impl BufferType {
    fn new(tag: &str, args: ParamArgs, intent: Option<Intent>, asynchronous: bool) -> Result<Self> {
        let param = Param::new(tag, args, Accepts::SCALAR.options(&[ASYNCHRONOUS]))?;
        let asynchronous = asynchronous || param.flag(ASYNCHRONOUS)?;
        Ok(Self {
            param,
            intent,
            asynchronous,
        })
    }
}

impl ParamType for BufferType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn interface_predeclare(&self) -> Option<String> {
        Some(format!("!OMPI_F08_IGNORE_TKR_PREDECL {}", self.param.name()))
    }

    fn declare(&self) -> String {
        Decl::new("OMPI_F08_IGNORE_TKR_TYPE", self.param.name())
            .maybe_intent(self.intent)
            .when_suffix(self.asynchronous, "OMPI_ASYNCHRONOUS")
            .to_string()
    }

    fn c_parameter(&self) -> String {
        format!("OMPI_CFI_BUFFER *{}", self.param.name())
    }
}

/// Output `TYPE(C_PTR)`, e.g. the base of allocated memory.
#[derive(Debug, Clone)]
struct CPtrType {
    param: Param,
}

impl ParamType for CPtrType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        Decl::new("TYPE(C_PTR)", self.param.name())
            .intent(Intent::Out)
            .to_string()
    }

    fn uses(&self) -> Vec<Import> {
        vec![Import::new(ISO_C_BINDING, "c_ptr")]
    }

    fn c_parameter(&self) -> String {
        format!("char *{}", self.param.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::{KindRegistry, ParamArgs};

    #[test]
    fn test_buffer_polarity() {
        let registry = KindRegistry::builtin();
        let send = registry.construct("BUFFER", ParamArgs::new("buf", "send")).unwrap();
        assert_eq!(send.declare(), "OMPI_F08_IGNORE_TKR_TYPE, INTENT(IN) :: buf");
        assert_eq!(
            send.interface_predeclare().as_deref(),
            Some("!OMPI_F08_IGNORE_TKR_PREDECL buf")
        );
        assert_eq!(send.c_parameter(), "OMPI_CFI_BUFFER *buf");

        let recv = registry
            .construct("BUFFER_ASYNC_OUT", ParamArgs::new("buf", "irecv"))
            .unwrap();
        assert_eq!(recv.declare(), "OMPI_F08_IGNORE_TKR_TYPE OMPI_ASYNCHRONOUS :: buf");
    }

    #[test]
    fn test_asynchronous_option() {
        let registry = KindRegistry::builtin();
        let args = ParamArgs::new("sendbuf", "igatherv").option("asynchronous", "true");
        let buf = registry.construct("VBUFFER", args).unwrap();
        assert_eq!(
            buf.declare(),
            "OMPI_F08_IGNORE_TKR_TYPE, INTENT(IN) OMPI_ASYNCHRONOUS :: sendbuf"
        );
    }

    #[test]
    fn test_c_ptr_out() {
        let registry = KindRegistry::builtin();
        let ptr = registry
            .construct("C_PTR_OUT", ParamArgs::new("baseptr", "alloc_mem"))
            .unwrap();
        assert_eq!(ptr.declare(), "TYPE(C_PTR), INTENT(OUT) :: baseptr");
        assert_eq!(ptr.c_parameter(), "char *baseptr");
        assert_eq!(ptr.uses().len(), 1);
    }
}
