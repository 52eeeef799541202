//! IR building rendering.

use dtp_diagnostic::Diagnostic;
use dtp_ir::LookupError;

use super::tokens::{frame_list_text, frame_text};
use super::{base, ContextRenderer};
use crate::problem::{
    CompoundShape, ContextKind, IrCompoundContext, IrConsequentContext, IrContext,
    IrPropertyContext,
};

impl ContextRenderer<'_> {
    pub(super) fn render_ir_consequent(
        &self,
        context: &IrConsequentContext,
    ) -> Result<Diagnostic, LookupError> {
        let frame = frame_text(&context.frame, self.lookup)?;

        Ok(base(ContextKind::IrConsequent, &context.message).with_note(format!(
            "Unsupported consequent found in frame: '{frame}'. Try rewriting the frame in a \
             supported format. We found the name '{}' with the description '{}'. If this is \
             not what was intended, try reordering the frame.",
            context.name, context.description
        )))
    }

    pub(super) fn render_ir_compound(
        &self,
        context: &IrCompoundContext,
    ) -> Result<Diagnostic, LookupError> {
        let note = match &context.shape {
            CompoundShape::UnsupportedOperator => {
                "Try adding support for this operator in the mappings file. \
                 Or use a supported operator (and, or, but)."
                    .to_string()
            }
            CompoundShape::UnsupportedTemporal { problem_frame } => format!(
                "Found in the frame: '{}'. Try reconfiguring to use a supported temporal \
                 operator (after, during, before, until).",
                frame_text(problem_frame, self.lookup)?
            ),
            CompoundShape::UnsupportedConfiguration { other_frames } => format!(
                "Unsupported configuration of frames: [{}]. Try rewriting the sentence to use \
                 supported compounds and temporal operators.",
                frame_list_text(other_frames, self.lookup)?
            ),
            CompoundShape::LeadingOperator {
                problem_frame,
                other_frames,
            } => format!(
                "'{}' was found in [{}]. Try reordering the information so that the compound \
                 or temporal operator does not come first. Do not start with \"And...\" or \
                 \"Until...\". Otherwise, the sentence is not supported as the compound is \
                 connecting no useful information.",
                frame_text(problem_frame, self.lookup)?,
                frame_list_text(other_frames, self.lookup)?
            ),
        };

        Ok(base(ContextKind::IrCompound, &context.message).with_note(note))
    }

    pub(super) fn render_ir_property(&self, context: &IrPropertyContext) -> Diagnostic {
        base(ContextKind::IrProperty, &context.message).with_note(format!(
            "Expected two sides of the expression. Found the name: '{}', and property: '{}'",
            context.name, context.property
        ))
    }

    pub(super) fn render_ir(&self, context: &IrContext) -> Result<Diagnostic, LookupError> {
        let mut diag = base(ContextKind::Ir, &context.message);

        if let Some(expression) = &context.semantic_expression {
            diag = diag.with_note(format!(
                "For the Semantic Expression: '{}'",
                expression.token_text
            ));
        }

        if let Some(frame) = &context.problem_frame {
            let text = frame_text(frame, self.lookup)?;
            diag = diag
                .with_note(format!("Inside the frame: {}[{text}]", frame.id))
                .with_note(
                    "Try adding this frame to the Mappings file in order to support it. \
                     Otherwise, rewrite the information in the above frame to fit an \
                     existing one.",
                );
        }

        Ok(diag)
    }
}
