//! Diagnostic system for explaining pipeline warnings.
//!
//! A [`Diagnostic`] is an ordered block of lines: the message authored by the
//! pipeline stage that failed, followed by notes that elaborate on it. Every
//! diagnostic carries an [`ErrorCode`] so users can look the failure up with
//! `dtp explain`.
//!
//! Diagnostics are handed to a [`emitter::DiagnosticEmitter`], which owns the
//! output channel (terminal, `tracing`, or an in-memory collector).

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
