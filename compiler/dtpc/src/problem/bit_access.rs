//! Bit-access normalization contexts.

use dtp_ir::{CompoundToken, Frame, Token};
use serde::{Deserialize, Serialize};

/// A bit access was found inside a frame but could not be processed.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BitAccessNormalizerFinderContext {
    pub message: String,
    /// The frame instance that matched the bit access.
    pub frame_instance: Frame,
    /// Tokens surrounding the match.
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl BitAccessNormalizerFinderContext {
    pub fn new(message: impl Into<String>, frame_instance: Frame, tokens: Vec<Token>) -> Self {
        BitAccessNormalizerFinderContext {
            message: message.into(),
            frame_instance,
            tokens,
        }
    }
}

/// A bit-access frame could not be replaced by a bit-access token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BitAccessNormalizerContext {
    pub message: String,
    /// Tokens surrounding the replacement site.
    #[serde(default)]
    pub tokens: Vec<Token>,
    /// The tokens that would have become the bit access.
    pub bit_access: CompoundToken,
}

impl BitAccessNormalizerContext {
    pub fn new(message: impl Into<String>, tokens: Vec<Token>, bit_access: CompoundToken) -> Self {
        BitAccessNormalizerContext {
            message: message.into(),
            tokens,
            bit_access,
        }
    }
}
