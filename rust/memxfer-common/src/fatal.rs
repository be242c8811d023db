//! Fatal condition reporting for the raw transfer engine.
//!
//! The raw entry points never return an error: a violated precondition means the
//! caller is broken and continuing would corrupt memory. The condition is logged
//! and turned into a panic, which aborts the process under `panic = "abort"`.

use crate::error::Error;

/// Reports a fatal condition and never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(err: Error) -> ! {
    debug_assert!(err.is_fatal());
    log::error!("memxfer: fatal: {err}");
    panic!("memxfer: fatal: {err}");
}

/// Checks a raw-engine precondition, reporting a `PreconditionViolation` if it does
/// not hold.
#[inline]
#[track_caller]
pub fn check_precondition(predicate: bool, name: &str, condition: &str) {
    if !predicate {
        fatal(Error::precondition(name, condition));
    }
}
