//! Shared helpers for memxfer tests and benchmarks: deterministic data, reference
//! transfers, guarded regions and a harness for fatal-path assertions.

pub mod data_gen;
pub mod guard;
