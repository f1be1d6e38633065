//! Opaque MPI handles.

use f08gen_core::Intent;

use super::boxed;
use crate::{Accepts, Decl, Import, KindRegistry, Param, ParamType};

/// Tag prefix and `mpi_f08` derived type of each handle.
const HANDLES: &[(&str, &str)] = &[
    ("COMM", "MPI_Comm"),
    ("GROUP", "MPI_Group"),
    ("SESSION", "MPI_Session"),
    ("WIN", "MPI_Win"),
    ("FILE", "MPI_File"),
    ("INFO", "MPI_Info"),
    ("DATATYPE", "MPI_Datatype"),
    ("OP", "MPI_Op"),
    ("REQUEST", "MPI_Request"),
    ("ERRHANDLER", "MPI_Errhandler"),
    ("MESSAGE", "MPI_Message"),
];

pub(super) fn register(registry: &mut KindRegistry) {
    for &(prefix, type_name) in HANDLES {
        for intent in Intent::ALL {
            let tag = format!("{}{}", prefix, intent.tag_suffix());
            registry.define(tag, move |tag, args| {
                let param = Param::new(tag, args, Accepts::SCALAR)?;
                Ok(boxed(HandleType {
                    param,
                    type_name,
                    intent,
                }))
            });
        }
    }
}

/// A handle: a wrapped `MPI_VAL` in the modern interface, a bare integer
/// in the legacy interface and always a bare integer in the shim.
#[derive(Debug, Clone)]
struct HandleType {
    param: Param,
    type_name: &'static str,
    intent: Intent,
}

impl ParamType for HandleType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        Decl::new(self.param.style().handle_type(self.type_name), self.param.name())
            .intent(self.intent)
            .to_string()
    }

    fn declare_cbinding_fortran(&self) -> String {
        Decl::new("INTEGER", self.param.name())
            .intent(self.intent)
            .to_string()
    }

    fn argument(&self) -> String {
        self.param.style().handle_value(self.param.name())
    }

    fn uses(&self) -> Vec<Import> {
        self.param.style().handle_imports(self.type_name)
    }

    fn c_parameter(&self) -> String {
        format!("MPI_Fint *{}", self.param.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Import, KindRegistry, ParamArgs};

    #[test]
    fn test_modern_comm() {
        let comm = KindRegistry::builtin()
            .construct("COMM", ParamArgs::new("comm", "comm_rank"))
            .unwrap();
        assert_eq!(comm.declare(), "TYPE(MPI_Comm), INTENT(IN) :: comm");
        assert_eq!(comm.declare_cbinding_fortran(), "INTEGER, INTENT(IN) :: comm");
        assert_eq!(comm.argument(), "comm%MPI_VAL");
        assert_eq!(comm.uses(), vec![Import::new("mpi_f08_types", "MPI_Comm")]);
        assert_eq!(comm.c_parameter(), "MPI_Fint *comm");
    }

    #[test]
    fn test_legacy_handles_are_integers() {
        let registry = KindRegistry::builtin();
        for tag in ["WIN_OUT", "FILE_INOUT", "MESSAGE_OUT", "REQUEST_INOUT"] {
            let handle = registry
                .construct(tag, ParamArgs::new("h", "f").legacy())
                .unwrap();
            assert!(handle.declare().starts_with("INTEGER, INTENT("), "{tag}");
            assert_eq!(handle.argument(), "h");
            assert!(handle.uses().is_empty());
        }
    }

    #[test]
    fn test_every_handle_has_three_intents() {
        let registry = KindRegistry::builtin();
        for (prefix, _) in super::HANDLES {
            for suffix in ["", "_OUT", "_INOUT"] {
                assert!(registry.contains(&format!("{prefix}{suffix}")));
            }
        }
    }
}
