//! Core definitions shared by the memxfer crates: the error taxonomy, the `Result`
//! alias and the fatal-condition reporting used by the raw transfer engine.

pub mod error;
pub mod fatal;
pub mod result;

pub use result::Result;
