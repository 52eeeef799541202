//! Diagnostic Rendering
//!
//! Converts [`crate::problem`] contexts into user-facing diagnostics. This
//! separates "what went wrong" (Context) from "how to display it" (Diagnostic).
//!
//! # Design
//!
//! [`ContextRenderer::render`] is an exhaustive match over [`Context`]; each
//! arm calls one renderer from the stage's submodule. Every diagnostic has:
//! - The code of the context's kind
//! - The producing stage's message as its main line
//! - Notes elaborating on it, in a fixed order per variant
//!
//! Renderers only read their context and the lookup. Any id the lookup cannot
//! resolve aborts that one diagnostic with a [`LookupError`].

mod bit_access;
mod frame;
mod ir;
mod semantic;
mod tokenize;
pub mod tokens;

#[cfg(test)]
mod fixtures;

pub use frame::Inconsistency;

use dtp_diagnostic::emitter::DiagnosticEmitter;
use dtp_diagnostic::{Diagnostic, ErrorCode};
use dtp_ir::{Lookup, LookupError};

use crate::problem::{Context, ContextKind, GenericContext, Warning};

/// Renders contexts against one lookup.
#[derive(Clone, Copy)]
pub struct ContextRenderer<'a> {
    lookup: &'a dyn Lookup,
}

impl<'a> ContextRenderer<'a> {
    pub fn new(lookup: &'a dyn Lookup) -> Self {
        ContextRenderer { lookup }
    }

    /// Explain one context.
    pub fn render(&self, context: &Context) -> Result<Diagnostic, LookupError> {
        let kind = context.kind();
        tracing::debug!(%kind, "explaining warning context");

        match context {
            Context::Generic(c) => Ok(render_generic(c)),
            Context::Tokenizer(c) => self.render_tokenizer(c),
            Context::Serializer(c) => Ok(self.render_serializer(c)),
            Context::FrameFinder(c) => self.render_frame_finder(c),
            Context::BitAccessNormalizerFinder(c) => self.render_bit_access_finder(c),
            Context::BitAccessNormalizer(c) => self.render_bit_access_normalizer(c),
            Context::SemanticExpression(c) => Ok(self.render_semantic_expression(c)),
            Context::IrConsequent(c) => self.render_ir_consequent(c),
            Context::IrCompound(c) => self.render_ir_compound(c),
            Context::IrProperty(c) => Ok(self.render_ir_property(c)),
            Context::Ir(c) => self.render_ir(c),
            Context::Unrecognized => Ok(render_unrecognized()),
        }
    }
}

/// Base diagnostic for a context kind: its code, informational severity and
/// the stage's message.
fn base(kind: ContextKind, message: &str) -> Diagnostic {
    Diagnostic::info(kind.code()).with_message(message)
}

fn render_generic(context: &GenericContext) -> Diagnostic {
    base(ContextKind::Generic, &context.message)
}

#[cold]
fn render_unrecognized() -> Diagnostic {
    Diagnostic::warning(ErrorCode::E9001)
        .with_message("Unrecognized warning context")
        .with_note("This warning was recorded by a newer pipeline and cannot be explained.")
}

/// Explain one warning and hand the diagnostic to `emitter`.
///
/// Nothing is emitted when the lookup cannot resolve an id in the context.
pub fn report_warning(
    warning: &Warning,
    lookup: &dyn Lookup,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<(), LookupError> {
    let diagnostic = ContextRenderer::new(lookup).render(&warning.context)?;
    emitter.emit(&diagnostic);
    Ok(())
}
