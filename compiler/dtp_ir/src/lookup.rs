//! The read-only lookup service that resolves ids back into text.
//!
//! Every id carried by a warning context is expected to resolve. A miss is a
//! contract violation by whoever produced the context, so lookups report it as
//! a [`LookupError`] instead of substituting placeholder text.

use serde::{Deserialize, Serialize};

use crate::{FrameId, TokenId, WordId};

/// Punctuation that attaches to the word before it.
const CLOSING_PUNCTUATION: &[&str] = &[",", ".", ";", ":", "!", "?", ")", "]"];

/// Brackets that attach to the word after them.
const OPENING_PUNCTUATION: &[&str] = &["(", "["];

/// An id the lookup tables do not know.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LookupError {
    #[error("no word is mapped to id {0}")]
    UnknownWord(WordId),
    #[error("no token definition for id {0}")]
    UnknownToken(TokenId),
    #[error("no frame definition for id {0}")]
    UnknownFrame(FrameId),
}

/// A token as declared in the token mapping.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct TokenDefinition {
    /// Definition type; [`TokenId::LITERAL`] for literal-type tokens.
    pub id: TokenId,
    #[serde(default)]
    pub stream: Vec<WordId>,
}

impl TokenDefinition {
    pub fn new(id: TokenId, stream: Vec<WordId>) -> Self {
        TokenDefinition { id, stream }
    }

    pub fn is_literal(&self) -> bool {
        self.id == TokenId::LITERAL
    }
}

/// Read-only access to the word, token and frame tables.
///
/// Implementations must not mutate anything observable through `&self`;
/// renderers share one lookup across every warning they explain.
pub trait Lookup {
    /// Text of a single word.
    fn unconvert(&self, word: WordId) -> Result<&str, LookupError>;

    /// Token definition for a search-tree key.
    fn token_definition(&self, token: TokenId) -> Result<&TokenDefinition, LookupError>;

    /// Number of literal slots a frame definition declares.
    fn expected_literal_count(&self, frame: FrameId) -> Result<usize, LookupError>;

    /// Words of a stream, in order.
    fn deserialize(&self, stream: &[WordId]) -> Result<Vec<&str>, LookupError> {
        stream.iter().map(|&word| self.unconvert(word)).collect()
    }

    /// Join words into natural-language text.
    fn merge_words(&self, words: &[&str]) -> String {
        merge_words(words)
    }

    /// Deserialize a stream and merge it in one step.
    fn stream_text(&self, stream: &[WordId]) -> Result<String, LookupError> {
        let words = self.deserialize(stream)?;
        Ok(self.merge_words(&words))
    }
}

/// Join words with single spaces, attaching punctuation to its neighbour.
///
/// `["pin", ",", "high"]` becomes `"pin, high"` and `["(", "x", ")"]`
/// becomes `"(x)"`. Empty words are skipped.
pub fn merge_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut merged = String::new();
    let mut attach_next = true;
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        if !attach_next && !CLOSING_PUNCTUATION.contains(&word) {
            merged.push(' ');
        }
        merged.push_str(word);
        attach_next = OPENING_PUNCTUATION.contains(&word);
    }
    merged
}
