//! Diagnostic Emitters
//!
//! Provides different destinations for diagnostics:
//! - Terminal: human-readable output with optional ANSI colors
//! - Tracing: one log event per diagnostic, through whatever subscriber is installed
//! - Collecting: keeps everything in memory, for tests and embedding hosts
//!
//! Renderers never print. The caller owns an emitter and passes it in; the
//! explainer only writes to it.

mod collect;
mod terminal;
mod trace;

pub use collect::{CollectingEmitter, Emitted};
pub use terminal::{ColorMode, TerminalEmitter};
pub use trace::TracingEmitter;

use crate::Diagnostic;

/// Returns "s" for plural counts, "" for singular.
#[inline]
pub(crate) fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Start a new group of diagnostics (one group per sentence).
    fn emit_heading(&mut self, heading: &str);

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of how many warnings were explained and how many failed.
    fn emit_summary(&mut self, explained: usize, failed: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_s() {
        assert_eq!(plural_s(0), "s");
        assert_eq!(plural_s(1), "");
        assert_eq!(plural_s(2), "s");
    }
}
