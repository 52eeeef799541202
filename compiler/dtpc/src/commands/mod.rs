//! Command handlers for the `dtp` CLI.
//!
//! Each submodule implements one subcommand.

mod errors;
mod explain;

pub use errors::{
    parse_errors_options, run_errors, show_error_messages, EmitMode, ErrorsOptions,
    ReportConfig, ReportSummary,
};
pub use explain::{explain_code, explanation};
