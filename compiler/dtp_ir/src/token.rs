//! Token instances produced by the tokenizer and the bit-access normalizer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WordId;

/// One unit of parsed input.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// A bit-access expression such as `P0.1` or `CTRL[7:4]`.
    Access(BitAccess),

    /// Several tokens merged into one by the normalizer.
    Compound(CompoundToken),

    /// A run of words.
    Plain {
        #[serde(default)]
        stream: Vec<WordId>,
    },
}

impl Token {
    /// Create a plain token from a word stream.
    pub fn plain(stream: Vec<WordId>) -> Self {
        Token::Plain { stream }
    }

    /// Create a compound token wrapping `original_tokens`.
    pub fn compound(original_tokens: Vec<Token>) -> Self {
        Token::Compound(CompoundToken::new(original_tokens))
    }
}

impl From<BitAccess> for Token {
    fn from(access: BitAccess) -> Self {
        Token::Access(access)
    }
}

/// A register bit or bit range.
///
/// The `Display` form is the canonical notation: `REG.n` for a single bit,
/// `REG[msb:lsb]` for a range.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct BitAccess {
    pub register: String,
    pub msb: u16,
    pub lsb: u16,
}

impl BitAccess {
    /// Access to a single bit of `register`.
    pub fn bit(register: impl Into<String>, bit: u16) -> Self {
        BitAccess {
            register: register.into(),
            msb: bit,
            lsb: bit,
        }
    }

    /// Access to bits `msb` down to `lsb` of `register`.
    pub fn range(register: impl Into<String>, msb: u16, lsb: u16) -> Self {
        BitAccess {
            register: register.into(),
            msb,
            lsb,
        }
    }

    pub fn is_single_bit(&self) -> bool {
        self.msb == self.lsb
    }
}

impl fmt::Display for BitAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_bit() {
            write!(f, "{}.{}", self.register, self.lsb)
        } else {
            write!(f, "{}[{}:{}]", self.register, self.msb, self.lsb)
        }
    }
}

/// Tokens that were merged into a single token, kept in their original order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct CompoundToken {
    #[serde(default)]
    pub original_tokens: Vec<Token>,
}

impl CompoundToken {
    pub fn new(original_tokens: Vec<Token>) -> Self {
        CompoundToken { original_tokens }
    }
}
