//! Harness for asserting that an operation takes the fatal path.
//!
//! The raw engine reports violated preconditions by panicking (which aborts the
//! process under `panic = "abort"`). With the default unwinding strategy the panic
//! can be caught, so tests can check both that the call did not return and what it
//! reported.

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Runs `f` and returns the message of the panic it raised.
///
/// # Panics
///
/// Panics if `f` returns normally.
pub fn expect_fatal<F: FnOnce()>(f: F) -> String {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("operation returned normally, expected a fatal condition"),
        Err(payload) => {
            if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = payload.downcast_ref::<&'static str>() {
                s.to_string()
            } else {
                String::from("<non-string panic payload>")
            }
        }
    }
}
