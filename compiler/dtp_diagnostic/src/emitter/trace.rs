//! Tracing Emitter
//!
//! Forwards each diagnostic to `tracing` as one event, at the level matching
//! the diagnostic's severity. The message is the event message; notes travel
//! in the `notes` field. Used when the explainer runs inside a host that
//! already collects logs.

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Emitter that writes through the installed `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingEmitter;

impl TracingEmitter {
    pub fn new() -> Self {
        TracingEmitter
    }
}

impl DiagnosticEmitter for TracingEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let code = diagnostic.code.as_str();
        let notes = &diagnostic.notes;
        let message = &diagnostic.message;
        match diagnostic.severity {
            Severity::Error => tracing::error!(code, ?notes, "{message}"),
            Severity::Warning => tracing::warn!(code, ?notes, "{message}"),
            Severity::Info => tracing::info!(code, ?notes, "{message}"),
        }
    }

    fn emit_heading(&mut self, heading: &str) {
        tracing::info!("{heading}");
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, explained: usize, failed: usize) {
        if failed > 0 {
            tracing::error!(explained, failed, "some warnings could not be explained");
        } else {
            tracing::info!(explained, "explained all warnings");
        }
    }
}
