//! Bit-access normalization rendering.

use dtp_diagnostic::Diagnostic;
use dtp_ir::LookupError;

use super::tokens::{compound_text, frame_text, sentence_text};
use super::{base, ContextRenderer};
use crate::problem::{BitAccessNormalizerContext, BitAccessNormalizerFinderContext, ContextKind};

impl ContextRenderer<'_> {
    pub(super) fn render_bit_access_finder(
        &self,
        context: &BitAccessNormalizerFinderContext,
    ) -> Result<Diagnostic, LookupError> {
        let bit_access = frame_text(&context.frame_instance, self.lookup)?;
        let surrounding = sentence_text(&context.tokens, self.lookup)?;

        Ok(
            base(ContextKind::BitAccessNormalizerFinder, &context.message).with_note(format!(
                "Unable to process the found bit-access '{bit_access}' in '{surrounding}'"
            )),
        )
    }

    pub(super) fn render_bit_access_normalizer(
        &self,
        context: &BitAccessNormalizerContext,
    ) -> Result<Diagnostic, LookupError> {
        let bit_access = compound_text(&context.bit_access, self.lookup)?;
        let surrounding = sentence_text(&context.tokens, self.lookup)?;

        Ok(
            base(ContextKind::BitAccessNormalizer, &context.message).with_note(format!(
                "Unable to replace bit-access-token frame '{bit_access}' in: '{surrounding}'. \
                 If this was not intended to be a bit access, then you must reformat it."
            )),
        )
    }
}
