//! Diagnostic system for generator error reporting.
//!
//! Every fatal condition of a generation pass is reported as a
//! [`Diagnostic`] carrying:
//! - An error code for searchability (`bridgec explain E1002`)
//! - A clear message (what went wrong)
//! - A subject label naming the offending declaration (where)
//! - Notes and suggestions (why, and how to fix)
//!
//! Generation is all-or-nothing, so there are no recoverable severities in
//! the pipeline itself; warnings exist for driver-level reporting only.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
