//! Properties that must hold for every registered kind in every variant.

use f08gen_core::Mode;
use f08gen_types::{Error, KindRegistry, ParamArgs, ParamFragments, ParamType};

/// Build `tag`, supplying a count only when the kind cannot do without one.
fn build(registry: &KindRegistry, tag: &str, bigcount: bool, mode: Mode) -> Box<dyn ParamType> {
    let args = ParamArgs::new("x", "sample").bigcount(bigcount).mode(mode);
    match registry.construct(tag, args.clone()) {
        Ok(param) => param,
        Err(Error::MissingCount { .. }) => registry
            .construct(tag, args.count("n"))
            .unwrap_or_else(|e| panic!("{tag} with count: {e}")),
        Err(e) => panic!("{tag}: {e}"),
    }
}

fn each_variant(mut check: impl FnMut(&str, bool, Mode, &dyn ParamType)) {
    let registry = KindRegistry::builtin();
    for tag in registry.tags() {
        for bigcount in [false, true] {
            for mode in Mode::ALL {
                let param = build(&registry, tag, bigcount, mode);
                check(tag, bigcount, mode, param.as_ref());
            }
        }
    }
}

#[test]
fn every_kind_emits_well_formed_fragments() {
    each_variant(|tag, _, mode, param| {
        let declare = param.declare();
        assert!(declare.contains(" :: x"), "{tag} {mode}: {declare}");
        assert!(
            param.declare_cbinding_fortran().contains(" :: x"),
            "{tag} {mode}"
        );
        assert!(!param.argument().is_empty(), "{tag} {mode}");

        let c_parameter = param.c_parameter();
        assert!(c_parameter.ends_with('x'), "{tag}: {c_parameter}");
        assert!(c_parameter.len() > 1, "{tag}");

        for fragment in [param.interface_predeclare(), param.declare_tmp()] {
            if let Some(text) = fragment {
                assert!(!text.is_empty(), "{tag}");
            }
        }
    });
}

#[test]
fn temporaries_are_passed_to_c() {
    each_variant(|tag, _, _, param| {
        if param.declare_tmp().is_some() {
            assert_eq!(param.argument(), param.tmp_name(), "{tag}");
            assert!(
                param.pre_c_call().is_some() || param.post().is_some(),
                "{tag} declares a temporary it never fills"
            );
        }
    });
}

#[test]
fn legacy_mode_uses_no_derived_types() {
    each_variant(|tag, _, mode, param| {
        if mode == Mode::Legacy {
            let declare = param.declare();
            assert!(!declare.contains("TYPE(MPI_"), "{tag}: {declare}");
            assert!(!param.argument().contains("%MPI_VAL"), "{tag}");
            assert!(
                param.uses().iter().all(|i| i.module != "mpi_f08_types"),
                "{tag}"
            );
        }
    });
}

#[test]
fn shim_never_sees_derived_types() {
    each_variant(|tag, _, _, param| {
        let shim = param.declare_cbinding_fortran();
        if shim.contains("TYPE(MPI_") {
            // Status objects are interoperable and passed as is.
            assert!(shim.starts_with("TYPE(MPI_Status)"), "{tag}: {shim}");
        }
    });
}

#[test]
fn api_name_follows_bigcount() {
    each_variant(|tag, bigcount, _, param| {
        assert_eq!(param.fn_api_name().ends_with("_C"), bigcount, "{tag}");
        assert!(param.fn_api_name().starts_with("MPI_SAMPLE"), "{tag}");
    });
}

#[test]
fn construction_is_deterministic() {
    let registry = KindRegistry::builtin();
    for tag in registry.tags() {
        for mode in Mode::ALL {
            let a = build(&registry, tag, true, mode);
            let b = build(&registry, tag, true, mode);
            assert_eq!(
                ParamFragments::collect(a.as_ref()),
                ParamFragments::collect(b.as_ref()),
                "{tag}"
            );
        }
    }
}

#[test]
fn dual_kinds_widen_only_for_bigcount() {
    let registry = KindRegistry::builtin();
    let dual = [
        ("COUNT", "MPI_Fint", "MPI_Count"),
        ("COUNT_OUT", "MPI_Fint", "MPI_Count"),
        ("COUNT_INOUT", "MPI_Fint", "MPI_Count"),
        ("AINT_COUNT", "MPI_Aint", "MPI_Count"),
        ("AINT_COUNT_OUT", "MPI_Aint", "MPI_Count"),
        ("AINT_COUNT_INOUT", "MPI_Aint", "MPI_Count"),
        ("DISP", "MPI_Fint", "MPI_Aint"),
        ("DISP_OUT", "MPI_Fint", "MPI_Aint"),
        ("COUNT_ARRAY", "MPI_Fint", "MPI_Count"),
        ("AINT_COUNT_ARRAY", "MPI_Aint", "MPI_Count"),
        ("DISP_ARRAY", "MPI_Fint", "MPI_Aint"),
    ];
    for (tag, narrow, wide) in dual {
        for mode in Mode::ALL {
            let classic = build(&registry, tag, false, mode);
            let big = build(&registry, tag, true, mode);
            assert_eq!(classic.c_parameter(), format!("{narrow} *x"), "{tag}");
            assert_eq!(big.c_parameter(), format!("{wide} *x"), "{tag}");
        }
    }
}

#[test]
fn legacy_handles_are_integers() {
    let registry = KindRegistry::builtin();
    for prefix in [
        "COMM",
        "GROUP",
        "SESSION",
        "WIN",
        "FILE",
        "INFO",
        "DATATYPE",
        "OP",
        "REQUEST",
        "ERRHANDLER",
        "MESSAGE",
    ] {
        for (suffix, intent) in [("", "IN"), ("_OUT", "OUT"), ("_INOUT", "INOUT")] {
            let tag = format!("{prefix}{suffix}");
            let handle = build(&registry, &tag, false, Mode::Legacy);
            assert_eq!(handle.declare(), format!("INTEGER, INTENT({intent}) :: x"));
            assert_eq!(handle.argument(), "x");
            assert_eq!(handle.c_parameter(), "MPI_Fint *x");
        }
    }
}

#[test]
fn logical_kinds_convert_both_ways() {
    let registry = KindRegistry::builtin();
    for (tag, pre, post) in [
        ("LOGICAL", true, false),
        ("LOGICAL_OUT", false, true),
        ("LOGICAL_INOUT", true, true),
        ("LOGICAL_ARRAY", true, false),
        ("LOGICAL_ARRAY_OUT", false, true),
        ("LOGICAL_ARRAY_INOUT", true, true),
    ] {
        let logical = build(&registry, tag, false, Mode::Modern);
        assert!(logical.declare_tmp().is_some(), "{tag}");
        assert_eq!(logical.argument(), "c_x");
        assert_eq!(logical.pre_c_call().is_some(), pre, "{tag}");
        assert_eq!(logical.post().is_some(), post, "{tag}");
        if post {
            assert_eq!(logical.post().as_deref(), Some("x = c_x /= 0"));
        }
    }
}

#[test]
fn counters_advance_per_descriptor() {
    let registry = KindRegistry::builtin();
    let mut a = build(&registry, "INT_ARRAY", false, Mode::Modern);
    let mut b = build(&registry, "INT_ARRAY", false, Mode::Modern);
    assert_eq!(a.tmp_counter(), "x_i_0");
    assert_eq!(a.tmp_counter(), "x_i_1");
    assert_eq!(a.tmp_counter(), "x_i_2");
    assert_eq!(b.tmp_counter(), "x_i_0");

    // A looped handle array already holds its first counter.
    let args = ParamArgs::new("reqs", "waitall")
        .count("n")
        .option("conversion", "loop");
    let mut reqs = registry.construct("REQUEST_ARRAY", args).unwrap();
    assert_eq!(reqs.tmp_counter(), "reqs_i_1");
}

#[test]
fn every_tag_is_upper_case() {
    let registry = KindRegistry::builtin();
    assert!(registry.len() > 90);
    for tag in registry.tags() {
        assert!(
            tag.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "{tag}"
        );
    }
}
