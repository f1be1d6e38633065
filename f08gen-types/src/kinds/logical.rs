//! Logicals, passed to C through integer temporaries.
//!
//! Fortran `LOGICAL` has no portable C representation, so the shim only ever
//! sees integers: the caller's value is encoded into a temporary before the
//! call and decoded back after it.

use f08gen_core::Intent;

use super::{boxed, count_include, count_uses};
use crate::{Accepts, CountUse, Decl, Import, KindRegistry, Param, ParamType};

/// Integer passed to C for `.TRUE.`.
pub const C_TRUE: i32 = 1;

/// Integer passed to C for `.FALSE.`.
pub const C_FALSE: i32 = 0;

/// Encoding applied by the pre-call conversion.
pub fn encode_logical(value: bool) -> i32 {
    if value { C_TRUE } else { C_FALSE }
}

/// Decoding applied by the post-call conversion: any nonzero value is true.
pub fn decode_logical(value: i32) -> bool {
    value != C_FALSE
}

pub(super) fn register(registry: &mut KindRegistry) {
    for intent in Intent::ALL {
        registry.define(format!("LOGICAL{}", intent.tag_suffix()), move |tag, args| {
            let param = Param::new(tag, args, Accepts::SCALAR)?;
            Ok(boxed(LogicalType {
                param,
                intent,
                array: false,
            }))
        });
        registry.define(
            format!("LOGICAL_ARRAY{}", intent.tag_suffix()),
            move |tag, args| {
                let param = Param::new(tag, args, Accepts::count(CountUse::Required))?;
                Ok(boxed(LogicalType {
                    param,
                    intent,
                    array: true,
                }))
            },
        );
    }
}

#[derive(Debug, Clone)]
struct LogicalType {
    param: Param,
    intent: Intent,
    array: bool,
}

impl LogicalType {
    fn dims(&self) -> Option<String> {
        if self.array {
            self.param.count().map(ToString::to_string)
        } else {
            None
        }
    }
}

impl ParamType for LogicalType {
    fn param(&self) -> &Param {
        &self.param
    }

    fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }

    fn declare(&self) -> String {
        Decl::new("LOGICAL", self.param.name())
            .intent(self.intent)
            .maybe_dims(self.dims())
            .to_string()
    }

    fn declare_cbinding_fortran(&self) -> String {
        Decl::new("INTEGER", self.param.name())
            .intent(self.intent)
            .maybe_dims(self.dims())
            .to_string()
    }

    // No initializer: it would give the temporary the SAVE attribute.
    fn declare_tmp(&self) -> Option<String> {
        Some(
            Decl::new("INTEGER", self.tmp_name())
                .maybe_dims(self.dims())
                .to_string(),
        )
    }

    fn argument(&self) -> String {
        self.tmp_name()
    }

    fn uses(&self) -> Vec<Import> {
        count_uses(self.param.style(), self.param.count())
    }

    fn include(&self) -> Option<&'static str> {
        count_include(self.param.style(), self.param.count())
    }

    fn pre_c_call(&self) -> Option<String> {
        self.intent.reads().then(|| {
            format!(
                "{} = merge({},{},{})",
                self.tmp_name(),
                C_TRUE,
                C_FALSE,
                self.param.name()
            )
        })
    }

    fn post(&self) -> Option<String> {
        self.intent.writes().then(|| {
            format!(
                "{} = {} /= {}",
                self.param.name(),
                self.tmp_name(),
                C_FALSE
            )
        })
    }

    fn c_parameter(&self) -> String {
        format!("MPI_Fint *{}", self.param.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ParamArgs};

    #[test]
    fn test_encoding_round_trip() {
        for value in [true, false] {
            assert_eq!(decode_logical(encode_logical(value)), value);
        }
        assert!(decode_logical(-1));
        assert!(decode_logical(42));
        assert!(!decode_logical(C_FALSE));
    }

    #[test]
    fn test_logical_in() {
        let flag = KindRegistry::builtin()
            .construct("LOGICAL", ParamArgs::new("flag", "comm_set_info"))
            .unwrap();
        assert_eq!(flag.declare(), "LOGICAL, INTENT(IN) :: flag");
        assert_eq!(flag.declare_cbinding_fortran(), "INTEGER, INTENT(IN) :: flag");
        assert_eq!(flag.declare_tmp().as_deref(), Some("INTEGER :: c_flag"));
        assert_eq!(flag.pre_c_call().as_deref(), Some("c_flag = merge(1,0,flag)"));
        assert_eq!(flag.argument(), "c_flag");
        assert_eq!(flag.post(), None);
    }

    #[test]
    fn test_logical_array_out() {
        let flags = KindRegistry::builtin()
            .construct(
                "LOGICAL_ARRAY_OUT",
                ParamArgs::new("flags", "testsome").count("incount"),
            )
            .unwrap();
        assert_eq!(flags.declare(), "LOGICAL, INTENT(OUT) :: flags(incount)");
        assert_eq!(
            flags.declare_tmp().as_deref(),
            Some("INTEGER :: c_flags(incount)")
        );
        assert_eq!(flags.pre_c_call(), None);
        assert_eq!(flags.post().as_deref(), Some("flags = c_flags /= 0"));
    }

    #[test]
    fn test_logical_array_needs_count() {
        let err = KindRegistry::builtin()
            .construct("LOGICAL_ARRAY", ParamArgs::new("flags", "f"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingCount {
                tag: "LOGICAL_ARRAY".to_string(),
                param: "flags".to_string(),
            }
        );
    }
}
