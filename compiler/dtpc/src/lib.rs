//! DTP Diagnostics - Explaining Pipeline Warnings
//!
//! The text processing pipeline does not abort when a stage cannot handle a
//! sentence. It records a warning carrying a structured [`problem::Context`]
//! and moves on. This crate turns those contexts back into readable
//! explanations of what went wrong and how to fix the input.
//!
//! # Architecture
//!
//! ```text
//! Project (sentences + warnings)      Mappings (words, tokens, frames)
//!     │                                   │
//!     ▼                                   │
//! show_error_messages() ── per warning ──►│
//!     │                                   ▼
//!     │                 ContextRenderer::render() ──► Diagnostic
//!     ▼                                                   │
//! DiagnosticEmitter ◄─────────────────────────────────────┘
//! ```

use std::sync::Once;

pub mod commands;
pub mod input;
pub mod problem;
pub mod reporting;

#[cfg(test)]
mod test_log;

pub use input::{Project, ProjectError, Sentence, SentenceKind};
pub use problem::{Context, ContextKind, Warning};
pub use reporting::{report_warning, ContextRenderer, Inconsistency};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for log output.
///
/// Call this once at startup. Safe to call multiple times.
/// `RUST_LOG` wins when set; otherwise `verbose` enables debug output for the
/// dtp crates and everything else logs at info.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("info,dtpc=debug,dtp_ir=debug,dtp_diagnostic=debug")
        } else {
            EnvFilter::new("info")
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .init();
    });
}
