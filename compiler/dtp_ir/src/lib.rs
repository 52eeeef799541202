//! DTP IR - Pipeline Data Model
//!
//! This crate contains the data the text processing pipeline hands to the
//! diagnostics layer when one of its stages gives up on a sentence:
//! - Identifiers for words, tokens and frames
//! - Tokens (plain word streams, bit accesses, compounds)
//! - Frames with their literal slots
//! - Search-tree nodes describing lookahead options
//! - Semantic expressions
//! - The read-only [`Lookup`] service that turns ids back into text
//!
//! # Design Philosophy
//!
//! - **Ids, not strings**: words are stored as `WordId(u32)` streams and only
//!   turned back into text through a [`Lookup`].
//! - **Read-only lookups**: nothing in this crate mutates a lookup table after
//!   it is loaded, so a single [`Mappings`] can be shared across threads.

mod expr;
mod frame;
mod id;
mod lookup;
mod mappings;
mod search_tree;
mod token;

pub use expr::SemanticExpression;
pub use frame::{Frame, Literal};
pub use id::{FrameId, TokenId, WordId};
pub use lookup::{merge_words, Lookup, LookupError, TokenDefinition};
pub use mappings::{FrameDefinition, Mappings};
pub use search_tree::SearchTreeNode;
pub use token::{BitAccess, CompoundToken, Token};
