//! Trie nodes enumerating the valid continuations at a parse position.
//!
//! The tokenizer walks a `SearchTreeNode<WordId>`; the frame finder walks a
//! `SearchTreeNode<TokenId>`. In both, the reserved `LEAF` key marks that the
//! sequence consumed so far is itself complete.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A search-tree node keyed by `K`.
///
/// Children are kept ordered by key so option listings are deterministic.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "K: Ord + Deserialize<'de>"))]
pub struct SearchTreeNode<K: Ord> {
    #[serde(default)]
    children: BTreeMap<K, SearchTreeNode<K>>,
}

impl<K: Ord> Default for SearchTreeNode<K> {
    fn default() -> Self {
        SearchTreeNode {
            children: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> SearchTreeNode<K> {
    /// A node with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the child reached through `key`.
    #[must_use]
    pub fn with_child(mut self, key: K, child: SearchTreeNode<K>) -> Self {
        self.children.insert(key, child);
        self
    }

    /// Add a child with no further continuations.
    #[must_use]
    pub fn with_option(self, key: K) -> Self {
        self.with_child(key, SearchTreeNode::new())
    }

    /// Keys of the valid next steps, in ascending order.
    pub fn child_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.children.keys().copied()
    }
}
