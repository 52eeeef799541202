//! Tokenizer and serializer contexts.

use dtp_ir::{SearchTreeNode, WordId};
use serde::{Deserialize, Serialize};

/// The tokenizer met a word that no known token continues with.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct TokenizerContext {
    pub message: String,
    pub current_word: WordId,
    /// Position of `current_word` in the sentence (0-based).
    pub word_index: usize,
    /// Valid continuations at the point of failure.
    #[serde(default)]
    pub lookahead: SearchTreeNode<WordId>,
}

impl TokenizerContext {
    pub fn new(
        message: impl Into<String>,
        current_word: WordId,
        word_index: usize,
        lookahead: SearchTreeNode<WordId>,
    ) -> Self {
        TokenizerContext {
            message: message.into(),
            current_word,
            word_index,
            lookahead,
        }
    }
}

/// The serializer met a word missing from its vocabulary.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct SerializerContext {
    pub message: String,
}

impl SerializerContext {
    pub fn new(message: impl Into<String>) -> Self {
        SerializerContext {
            message: message.into(),
        }
    }
}
