//! In-memory emitter.

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// One event recorded by a [`CollectingEmitter`].
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Emitted {
    Heading(String),
    Diagnostic(Diagnostic),
    Summary { explained: usize, failed: usize },
}

/// Emitter that records everything in order.
#[derive(Clone, Debug, Default)]
pub struct CollectingEmitter {
    pub events: Vec<Emitted>,
    flushes: usize,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every diagnostic, in emission order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter().filter_map(|event| match event {
            Emitted::Diagnostic(diag) => Some(diag),
            _ => None,
        })
    }

    /// Every heading, in emission order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            Emitted::Heading(heading) => Some(heading.as_str()),
            _ => None,
        })
    }

    /// The lines of every diagnostic, flattened.
    pub fn lines(&self) -> Vec<&str> {
        self.diagnostics().flat_map(Diagnostic::lines).collect()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl DiagnosticEmitter for CollectingEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.events.push(Emitted::Diagnostic(diagnostic.clone()));
    }

    fn emit_heading(&mut self, heading: &str) {
        self.events.push(Emitted::Heading(heading.to_string()));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn emit_summary(&mut self, explained: usize, failed: usize) {
        self.events.push(Emitted::Summary { explained, failed });
    }
}
