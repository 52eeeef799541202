//! Frame finder contexts.

use dtp_ir::{Frame, SearchTreeNode, Token, TokenId};
use serde::{Deserialize, Serialize};

/// The frame finder could not complete a frame.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct FrameFinderContext {
    pub message: String,
    pub frame: Frame,
    pub search: FrameSearch,
}

impl FrameFinderContext {
    /// A frame was matched but its literals are incomplete.
    pub fn matched(message: impl Into<String>, frame: Frame) -> Self {
        FrameFinderContext {
            message: message.into(),
            frame,
            search: FrameSearch::Matched,
        }
    }

    /// The search stopped while more tokens were still expected.
    pub fn pending(
        message: impl Into<String>,
        frame: Frame,
        lookahead: SearchTreeNode<TokenId>,
        tokens: Vec<Token>,
    ) -> Self {
        FrameFinderContext {
            message: message.into(),
            frame,
            search: FrameSearch::Pending { lookahead, tokens },
        }
    }
}

/// Where the frame search was when it gave up.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FrameSearch {
    /// A frame was matched; the problem lies in its literal slots.
    Matched,

    /// The search tree still had continuations.
    Pending {
        lookahead: SearchTreeNode<TokenId>,
        /// Tokens consumed on the failing path; the last one is the token
        /// that no continuation accepted.
        #[serde(default)]
        tokens: Vec<Token>,
    },
}
