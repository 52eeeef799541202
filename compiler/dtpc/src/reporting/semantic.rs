//! Semantic expression rendering.

use dtp_diagnostic::Diagnostic;

use super::{base, ContextRenderer};
use crate::problem::{ContextKind, SemanticExpressionContext};

impl ContextRenderer<'_> {
    pub(super) fn render_semantic_expression(
        &self,
        context: &SemanticExpressionContext,
    ) -> Diagnostic {
        let diag = base(ContextKind::SemanticExpression, &context.message);
        let expression = &context.semantic_expression;

        if !expression.has_frames() {
            return diag.with_note(
                "This sentence is not supported. Could not find any meaningful information. \
                 Try rewriting if this was not intended.",
            );
        }

        let count = expression.antecedents.len();
        let plural = if count == 1 { "" } else { "s" };
        diag.with_note(format!(
            "Found {count} antecedent{plural} but no consequents. Either the consequents are \
             in another sentence (List) or they are not yet supported."
        ))
        .with_note(
            "In order to fix, join the list sentences together or add a new mapping for the \
             consequent.",
        )
    }
}
