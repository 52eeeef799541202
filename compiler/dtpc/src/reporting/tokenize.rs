//! Tokenizer and serializer rendering.

use dtp_diagnostic::Diagnostic;
use dtp_ir::{LookupError, SearchTreeNode, WordId};

use super::{base, ContextRenderer};
use crate::problem::{ContextKind, SerializerContext, TokenizerContext};

/// How the end-of-sequence key is shown in option lists.
pub(super) const LEAF_OPTION: &str = "LEAF";

impl ContextRenderer<'_> {
    pub(super) fn render_tokenizer(
        &self,
        context: &TokenizerContext,
    ) -> Result<Diagnostic, LookupError> {
        let word = self.lookup.unconvert(context.current_word)?;
        let options = self.word_options(&context.lookahead)?;

        Ok(base(ContextKind::Tokenizer, &context.message).with_note(format!(
            "Encountered an unexpected word during tokenization. At word: {word}[{}]. \
             Expected options: [{}]",
            context.word_index,
            options.join(", ")
        )))
    }

    pub(super) fn render_serializer(&self, context: &SerializerContext) -> Diagnostic {
        base(ContextKind::Serializer, &context.message).with_note(
            "Please add a mapping by rerunning the processor with the \"--add-new\" option.",
        )
    }

    /// The words the tokenizer would have accepted, in key order.
    fn word_options(&self, node: &SearchTreeNode<WordId>) -> Result<Vec<String>, LookupError> {
        node.child_keys()
            .map(|word| {
                if word == WordId::LEAF {
                    Ok(LEAF_OPTION.to_string())
                } else {
                    self.lookup.unconvert(word).map(str::to_string)
                }
            })
            .collect()
    }
}
