//! Frames: token sequences matched against a known semantic pattern.

use serde::{Deserialize, Serialize};

use crate::{FrameId, Token};

/// A slot in a frame that should hold extracted content.
///
/// Serialized as the bare list of tokens filling the slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal {
    pub tokens: Vec<Token>,
}

impl Literal {
    pub fn new(tokens: Vec<Token>) -> Self {
        Literal { tokens }
    }

    /// A slot nothing was extracted into.
    pub fn empty() -> Self {
        Literal::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A structured match of tokens against a frame definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub literals: Vec<Literal>,
}

impl Frame {
    pub fn new(id: FrameId, tokens: Vec<Token>) -> Self {
        Frame {
            id,
            tokens,
            literals: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_literals(mut self, literals: Vec<Literal>) -> Self {
        self.literals = literals;
        self
    }

    /// Index (0-based) of the first literal slot left empty, if any.
    ///
    /// Computed on every call; frames do not cache literal state.
    pub fn first_empty_literal(&self) -> Option<usize> {
        self.literals.iter().position(Literal::is_empty)
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }
}
