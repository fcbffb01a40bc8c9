//! Dictionary abstractions consumed by the fuzzy search.
//!
//! The search only needs to walk a prefix graph character by character, so it
//! is written against the [`Dictionary`] / [`DictionaryNode`] pair rather than
//! a concrete trie. [`trie::Trie`] is the backend shipped with the crate.

pub mod trie;

pub use trie::{Trie, TrieNodeRef};

/// A vocabulary that can be traversed from a root node.
pub trait Dictionary {
    /// The node handle used for traversal
    type Node<'a>: DictionaryNode
    where
        Self: 'a;

    /// Get the root node (the empty prefix)
    fn root(&self) -> Self::Node<'_>;

    /// Check if a word exists in the dictionary
    fn contains(&self, word: &str) -> bool {
        let mut node = self.root();
        for label in word.chars() {
            match node.transition(label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_final()
    }

    /// Number of distinct words stored
    fn len(&self) -> usize;

    /// Check if the dictionary holds no words
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Traversable dictionary node.
///
/// Nodes form a graph whose edges are labeled with characters; final nodes
/// mark complete words. Handles are cheap to clone and safe to share across
/// threads, so concurrent searches can walk the same dictionary.
pub trait DictionaryNode: Clone + Send + Sync {
    /// Check if this node marks the end of a word
    fn is_final(&self) -> bool;

    /// Transition to a child node via the given character
    ///
    /// Returns `None` if no such transition exists
    fn transition(&self, label: char) -> Option<Self>;

    /// Iterate over all outgoing edges as (char, child_node) pairs.
    ///
    /// The order must be stable between calls on the same node.
    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_>;

    /// Check if a specific edge exists
    fn has_edge(&self, label: char) -> bool {
        self.transition(label).is_some()
    }

    /// Get the number of outgoing edges
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
