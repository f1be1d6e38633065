//! Derived identifiers for a parameter.
//!
//! All names are pure functions of the parameter name (and, for loop
//! counters, of how many counters were already handed out), so generating
//! the same function twice yields the same text.

use crate::utils::capitalize;

/// Maximum identifier length accepted by Fortran 2003 and later.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Primary temporary for a parameter: `c_<name>`.
pub fn tmp_name(name: &str) -> String {
    format!("c_{}", name)
}

/// Secondary temporary for a parameter: `c_<name>2`.
pub fn tmp_name2(name: &str) -> String {
    format!("c_{}2", name)
}

/// The `n`th loop counter for a parameter: `<name>_i_<n>`.
pub fn counter_name(name: &str, n: usize) -> String {
    format!("{}_i_{}", name, n)
}

/// External MPI name of a function, upper-cased for diagnostics.
///
/// `("comm_rank", false)` gives `MPI_COMM_RANK`; the big-count variant of
/// `send` is `MPI_SEND_C`.
pub fn api_name(fn_name: &str, bigcount: bool) -> String {
    let base = fn_name
        .strip_prefix("MPI_")
        .or_else(|| fn_name.strip_prefix("mpi_"))
        .unwrap_or(fn_name);
    let suffix = if bigcount { "_c" } else { "" };
    format!("MPI_{}{}", capitalize(base), suffix).to_uppercase()
}

/// Check whether `name` is a valid Fortran identifier.
pub fn is_fortran_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name.len() <= MAX_IDENTIFIER_LEN && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Per-descriptor loop counter state.
///
/// Each call to [`LoopCounters::next_name`] hands out a fresh counter, so two
/// loops over the same parameter never share a variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopCounters {
    used: usize,
}

impl LoopCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next counter name for `name` and advance.
    pub fn next_name(&mut self, name: &str) -> String {
        let counter = counter_name(name, self.used);
        self.used += 1;
        counter
    }
}
