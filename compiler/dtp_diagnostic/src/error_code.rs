//! Codes for every diagnostic the explainer emits.
//!
//! The first digit names the pipeline stage whose warning is being explained.
//! Used for `dtp explain` lookups.

use std::fmt;

/// Diagnostic codes.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Stage-agnostic warnings
/// - E1xxx: Tokenizer and serializer
/// - E2xxx: Bit-access normalization
/// - E3xxx: Frame finding
/// - E4xxx: Semantic expression construction
/// - E5xxx: IR building
/// - E9xxx: Internal problems of the explainer itself
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Generic pipeline warning
    E0001,

    /// Unexpected word during tokenization
    E1001,
    /// Word missing from the serializer's vocabulary
    E1002,

    /// Bit access found but not processable
    E2001,
    /// Bit access could not be replaced
    E2002,

    /// No frame could be completed
    E3001,

    /// Semantic expression without a consequent
    E4001,

    /// IR frame not supported
    E5001,
    /// IR property missing a side
    E5002,
    /// IR compound not supported
    E5003,
    /// IR consequent not supported
    E5004,

    /// Warning context not recognized by this build
    E9001,
    /// Warning references an id missing from the mapping tables
    E9002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E4001,
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E5003,
        ErrorCode::E5004,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E5004 => "E5004",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Longer explanation shown by `dtp explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A pipeline stage reported a problem that carries no structured \
                 detail. Only the stage's own message is available."
            }
            ErrorCode::E1001 => {
                "The tokenizer reached a word that does not continue any known \
                 token. The diagnostic lists the word, its position in the \
                 sentence, and the words that would have been accepted. LEAF \
                 means the token could also have ended before this word."
            }
            ErrorCode::E1002 => {
                "The serializer met a word that has no id in the vocabulary. \
                 Rerun the processor with --add-new to add a mapping for it."
            }
            ErrorCode::E2001 => {
                "A bit access (such as P0.1 or CTRL[7:4]) was recognised inside \
                 a frame but could not be processed in its surrounding text."
            }
            ErrorCode::E2002 => {
                "A bit-access frame could not be replaced by a bit-access token. \
                 If the text was not meant to be a bit access, reformat it."
            }
            ErrorCode::E3001 => {
                "The frame finder could not complete a frame. Either a literal \
                 slot was left empty, fewer literals were found than the frame \
                 expects, or a token appeared that no frame continues with."
            }
            ErrorCode::E4001 => {
                "The sentence produced no usable semantic expression: either no \
                 frames were found at all, or only antecedents were found and \
                 the consequent is missing."
            }
            ErrorCode::E5001 => {
                "A frame reached IR building but has no IR mapping. Add the \
                 frame to the mappings file or rewrite it to fit an existing one."
            }
            ErrorCode::E5002 => {
                "An IR property needs both a name and a property side; one of \
                 them was missing or malformed."
            }
            ErrorCode::E5003 => {
                "A compound or temporal operator connects frames in a way IR \
                 building does not support."
            }
            ErrorCode::E5004 => {
                "A consequent frame was found but its name and description do \
                 not form a supported consequent."
            }
            ErrorCode::E9001 => {
                "The warning context has a kind this build of dtp does not know. \
                 The pipeline that produced the project is newer than the \
                 explainer."
            }
            ErrorCode::E9002 => {
                "The warning refers to a word, token or frame id that is missing \
                 from the mappings file. Check that the mappings file is the one \
                 the project was processed with."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E3001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
