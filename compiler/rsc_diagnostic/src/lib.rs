//! Diagnostic system for the semantic core.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Notes (why it's wrong)
//!
//! Internal compiler errors (`E9xxx`) are diagnostics like any other: the
//! type context queues them instead of aborting, and the driver decides
//! how to report them.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{internal_error, recursion_limit_exceeded, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
