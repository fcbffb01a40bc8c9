//! Prefix tree storing the search vocabulary.
//!
//! Nodes live in a single arena (`Vec<TrieNode>`) and refer to their children
//! by index. Each node keeps its outgoing edges sorted by label, so lookups can
//! switch from a linear scan to binary search on wide nodes and traversal order
//! is stable.

use crate::dictionary::{Dictionary, DictionaryNode};

/// Fan-out above which edge lookup switches to binary search.
const LINEAR_SCAN_LIMIT: usize = 16;

/// A character trie for approximate string matching.
///
/// Words are inserted one at a time and never removed. Once insertion is
/// finished the trie can be shared (`&Trie` or `Arc<Trie>`) between any number
/// of concurrent searches; insertion requires `&mut self`, which keeps it
/// exclusive.
///
/// # Example
///
/// ```rust
/// use leven_search::dictionary::{Dictionary, Trie};
///
/// let mut trie = Trie::new();
/// trie.insert("test");
/// trie.insert("testing");
///
/// assert!(trie.contains("test"));
/// assert!(!trie.contains("tes"));
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

/// A node in the trie arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Edges to child nodes: (label, child index), sorted by label
    pub edges: Vec<(char, usize)>,
    /// True if a word ends at this node
    pub is_final: bool,
}

impl TrieNode {
    #[inline]
    fn child(&self, label: char) -> Option<usize> {
        if self.edges.len() < LINEAR_SCAN_LIMIT {
            self.edges
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, idx)| *idx)
        } else {
            self.edges
                .binary_search_by_key(&label, |(l, _)| *l)
                .ok()
                .map(|pos| self.edges[pos].1)
        }
    }
}

impl Trie {
    /// Create an empty trie holding only the root.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Build a trie from an iterator of words.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Inserting a word that is already present leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut node_idx = 0;

        for label in word.chars() {
            node_idx = match self.nodes[node_idx].child(label) {
                Some(idx) => idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());

                    let edges = &mut self.nodes[node_idx].edges;
                    let pos = edges.partition_point(|(l, _)| *l < label);
                    edges.insert(pos, (label, new_idx));
                    new_idx
                }
            };
        }

        let last = &mut self.nodes[node_idx];
        if !last.is_final {
            last.is_final = true;
            self.word_count += 1;
        }
    }

    /// Get the number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every stored word, depth-first in label order.
    pub fn iter(&self) -> Words<'_> {
        Words {
            nodes: &self.nodes,
            stack: vec![(0, 0, None)],
            path: Vec::new(),
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl Dictionary for Trie {
    type Node<'a> = TrieNodeRef<'a>;

    fn root(&self) -> Self::Node<'_> {
        TrieNodeRef {
            nodes: &self.nodes,
            node_idx: 0,
        }
    }

    fn len(&self) -> usize {
        self.word_count
    }

    /// Walks node indices directly instead of building handles.
    fn contains(&self, word: &str) -> bool {
        let mut node_idx = 0;
        for label in word.chars() {
            match self.nodes[node_idx].child(label) {
                Some(idx) => node_idx = idx,
                None => return false,
            }
        }
        self.nodes[node_idx].is_final
    }
}

/// A borrowed handle to one node of a [`Trie`].
#[derive(Clone, Copy, Debug)]
pub struct TrieNodeRef<'a> {
    nodes: &'a [TrieNode],
    node_idx: usize,
}

impl<'a> TrieNodeRef<'a> {
    /// Arena index of this node (0 is the root).
    pub fn index(&self) -> usize {
        self.node_idx
    }
}

impl<'a> DictionaryNode for TrieNodeRef<'a> {
    fn is_final(&self) -> bool {
        self.nodes[self.node_idx].is_final
    }

    fn transition(&self, label: char) -> Option<Self> {
        self.nodes[self.node_idx]
            .child(label)
            .map(|node_idx| TrieNodeRef {
                nodes: self.nodes,
                node_idx,
            })
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_> {
        let nodes = self.nodes;
        Box::new(
            nodes[self.node_idx]
                .edges
                .iter()
                .map(move |&(label, node_idx)| (label, TrieNodeRef { nodes, node_idx })),
        )
    }

    fn edge_count(&self) -> usize {
        self.nodes[self.node_idx].edges.len()
    }
}

/// Depth-first iterator over the words of a [`Trie`].
pub struct Words<'a> {
    nodes: &'a [TrieNode],
    // (node index, depth, label of the edge leading here)
    stack: Vec<(usize, usize, Option<char>)>,
    path: Vec<char>,
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node_idx, depth, label)) = self.stack.pop() {
            self.path.truncate(depth.saturating_sub(1));
            if let Some(label) = label {
                self.path.push(label);
            }

            let node = &self.nodes[node_idx];
            for &(child_label, child_idx) in node.edges.iter().rev() {
                self.stack.push((child_idx, depth + 1, Some(child_label)));
            }

            if node.is_final {
                return Some(self.path.iter().collect());
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
