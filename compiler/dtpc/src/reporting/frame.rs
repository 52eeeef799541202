//! Frame finder rendering.
//!
//! A matched frame is checked for an empty literal slot first, then for a
//! short literal count. A pending search reports the token that stopped it,
//! the tokens before it, and what the search tree would have accepted.

use dtp_diagnostic::Diagnostic;
use dtp_ir::{Frame, FrameId, LookupError, SearchTreeNode, Token, TokenId};

use super::tokenize::LEAF_OPTION;
use super::tokens::{frame_text, sentence_text, token_text};
use super::{base, ContextRenderer};
use crate::problem::{ContextKind, FrameFinderContext, FrameSearch};

/// How a non-literal token is shown in option lists.
const PLACEHOLDER_OPTION: &str = " _ ";

const REORDER_HINT: &str = "This difference is often because another frame was detected. \
     This could be in the form of a normal frame (antecedent or consequent) or a compound \
     (and, or, but). If this is the case then you can reorder the frames to get them to work.";

const CONTACT_DEVELOPER: &str = "This case should not occur! Contact the developer!";

/// A frame finder context whose data contradicts itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    /// Every literal is filled and there are at least as many as expected, yet
    /// the frame finder still gave up on the frame.
    #[error(
        "frame {frame} has {actual} filled literals of {expected} expected, \
         yet the frame finder rejected it"
    )]
    LiteralCountNotShort {
        frame: FrameId,
        actual: usize,
        expected: usize,
    },
}

impl ContextRenderer<'_> {
    pub(super) fn render_frame_finder(
        &self,
        context: &FrameFinderContext,
    ) -> Result<Diagnostic, LookupError> {
        let diag = base(ContextKind::FrameFinder, &context.message);
        match &context.search {
            FrameSearch::Matched => self.explain_matched_frame(diag, &context.frame),
            FrameSearch::Pending { lookahead, tokens } => {
                self.explain_pending_search(diag, lookahead, tokens)
            }
        }
    }

    fn explain_matched_frame(
        &self,
        diag: Diagnostic,
        frame: &Frame,
    ) -> Result<Diagnostic, LookupError> {
        let text = frame_text(frame, self.lookup)?;

        if let Some(index) = frame.first_empty_literal() {
            return Ok(diag.with_note(format!(
                "In the frame '{text}' at literal {}. Fill in the missing information.",
                index + 1
            )));
        }

        let expected = self.lookup.expected_literal_count(frame.id)?;
        let actual = frame.literal_count();
        let diag = diag.with_note(format!(
            "The found frame: '{text}' expected {expected} literals."
        ));
        if actual < expected {
            return Ok(diag.with_note(REORDER_HINT));
        }

        let inconsistency = Inconsistency::LiteralCountNotShort {
            frame: frame.id,
            actual,
            expected,
        };
        tracing::info!(%inconsistency, "inconsistent frame finder context");
        Ok(diag
            .with_note(inconsistency.to_string())
            .with_note(CONTACT_DEVELOPER))
    }

    fn explain_pending_search(
        &self,
        diag: Diagnostic,
        lookahead: &SearchTreeNode<TokenId>,
        tokens: &[Token],
    ) -> Result<Diagnostic, LookupError> {
        let Some((problem, so_far)) = tokens.split_last() else {
            return Ok(diag.with_note(
                "Complete literal frame. No valid frame available for parsing. \
                 This can be solved by adding a new mapping or alias to the frame mappings.",
            ));
        };

        let problem = token_text(problem, self.lookup)?;
        let so_far = sentence_text(so_far, self.lookup)?;
        let options = self.token_options(lookahead)?;

        Ok(diag.with_note(format!(
            "Encountered an unexpected token when parsing the semantic expression. \
             At the token: '{problem}'. So far: [{so_far}] Expected options: [{}]",
            options.join(", ")
        )))
    }

    /// The tokens the frame finder would have accepted, in key order.
    ///
    /// Literal tokens show their words; any other token type stands for a
    /// slot and shows as a placeholder.
    fn token_options(&self, node: &SearchTreeNode<TokenId>) -> Result<Vec<String>, LookupError> {
        node.child_keys()
            .map(|key| {
                if key == TokenId::LEAF {
                    return Ok(LEAF_OPTION.to_string());
                }
                let definition = self.lookup.token_definition(key)?;
                if definition.is_literal() {
                    self.lookup.stream_text(&definition.stream)
                } else {
                    Ok(PLACEHOLDER_OPTION.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
