//! Table-backed [`Lookup`] loaded from the pipeline's mapping file.
//!
//! ```text
//! {
//!   "words":  { "1": "open", "2": "drain" },
//!   "tokens": { "20": { "id": 1, "stream": [1, 2] } },
//!   "frames": { "100": { "literals": 2 } }
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{FrameId, Lookup, LookupError, TokenDefinition, TokenId, WordId};

/// Frame metadata the diagnostics need.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct FrameDefinition {
    /// Number of literal slots the frame expects.
    pub literals: usize,
}

/// In-memory word, token and frame tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mappings {
    #[serde(default)]
    words: FxHashMap<WordId, String>,
    #[serde(default)]
    tokens: FxHashMap<TokenId, TokenDefinition>,
    #[serde(default)]
    frames: FxHashMap<FrameId, FrameDefinition>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_word(mut self, word: WordId, text: impl Into<String>) -> Self {
        self.words.insert(word, text.into());
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: TokenId, definition: TokenDefinition) -> Self {
        self.tokens.insert(token, definition);
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: FrameId, literals: usize) -> Self {
        self.frames.insert(frame, FrameDefinition { literals });
        self
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Lookup for Mappings {
    fn unconvert(&self, word: WordId) -> Result<&str, LookupError> {
        self.words
            .get(&word)
            .map(String::as_str)
            .ok_or(LookupError::UnknownWord(word))
    }

    fn token_definition(&self, token: TokenId) -> Result<&TokenDefinition, LookupError> {
        self.tokens
            .get(&token)
            .ok_or(LookupError::UnknownToken(token))
    }

    fn expected_literal_count(&self, frame: FrameId) -> Result<usize, LookupError> {
        self.frames
            .get(&frame)
            .map(|definition| definition.literals)
            .ok_or(LookupError::UnknownFrame(frame))
    }
}
