//! User procedures passed as C function pointers.

use super::boxed;
use crate::{Accepts, Decl, Import, KindRegistry, Param, ParamType};

/// Tag, Fortran abstract interface, Open MPI function-pointer typedef.
const CALLBACKS: &[(&str, &str, &str)] = &[
    (
        "COMM_COPY_ATTR_FN",
        "MPI_Comm_copy_attr_function",
        "ompi_aint_copy_attr_function",
    ),
    (
        "TYPE_COPY_ATTR_FN",
        "MPI_Type_copy_attr_function",
        "ompi_aint_copy_attr_function",
    ),
    (
        "WIN_COPY_ATTR_FN",
        "MPI_Win_copy_attr_function",
        "ompi_aint_copy_attr_function",
    ),
    (
        "COMM_DELETE_ATTR_FN",
        "MPI_Comm_delete_attr_function",
        "ompi_aint_delete_attr_function",
    ),
    (
        "TYPE_DELETE_ATTR_FN",
        "MPI_Type_delete_attr_function",
        "ompi_aint_delete_attr_function",
    ),
    (
        "WIN_DELETE_ATTR_FN",
        "MPI_Win_delete_attr_function",
        "ompi_aint_delete_attr_function",
    ),
    (
        "COMM_ERRHANDLER_FN",
        "MPI_Comm_errhandler_function",
        "ompi_errhandler_fortran_handler_fn_t",
    ),
    (
        "FILE_ERRHANDLER_FN",
        "MPI_File_errhandler_function",
        "ompi_errhandler_fortran_handler_fn_t",
    ),
    (
        "SESSION_ERRHANDLER_FN",
        "MPI_Session_errhandler_function",
        "ompi_errhandler_fortran_handler_fn_t",
    ),
    (
        "WIN_ERRHANDLER_FN",
        "MPI_Win_errhandler_function",
        "ompi_errhandler_fortran_handler_fn_t",
    ),
    (
        "DATAREP_CONVERSION_FN",
        "MPI_Datarep_conversion_function",
        "ompi_mpi2_fortran_datarep_conversion_fn_t",
    ),
    (
        "DATAREP_EXTENT_FN",
        "MPI_Datarep_extent_function",
        "ompi_mpi2_fortran_datarep_extent_fn_t",
    ),
];

pub(super) fn register(registry: &mut KindRegistry) {
    for &(tag, interface, c_type) in CALLBACKS {
        registry.define(tag.to_string(), move |tag, args| {
            let param = Param::new(tag, args, Accepts::SCALAR)?;
            Ok(boxed(CallbackType {
                param,
                interface,
                c_type,
            }))
        });
    }
}

#[derive(Debug, Clone)]
struct CallbackType {
    param: Param,
    interface: &'static str,
    c_type: &'static str,
}

impl ParamType for CallbackType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        self.param
            .style()
            .procedure_declaration(self.interface, self.param.name())
    }

    fn declare_cbinding_fortran(&self) -> String {
        Decl::new("TYPE(C_FUNPTR)", self.param.name()).to_string()
    }

    fn declare_tmp(&self) -> Option<String> {
        Some(Decl::new("TYPE(C_FUNPTR)", self.tmp_name()).to_string())
    }

    fn argument(&self) -> String {
        self.tmp_name()
    }

    fn uses(&self) -> Vec<Import> {
        self.param.style().procedure_imports(self.interface)
    }

    fn pre_c_call(&self) -> Option<String> {
        Some(format!("{} = c_funloc({})", self.tmp_name(), self.param.name()))
    }

    fn c_parameter(&self) -> String {
        format!("{} {}", self.c_type, self.param.name())
    }
}
