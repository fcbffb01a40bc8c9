//! Search results: matched words with their distance and edit trace.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::cost::Edit;

/// A matched word, its minimal cost and the edits realizing it.
///
/// `updates` lists the edits in left-to-right alignment order over the query.
/// An exact match has an empty trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct ResultItem {
    /// The matched vocabulary word
    pub word: String,
    /// Minimal total edit cost from the query
    pub dist: f64,
    /// Edits on the minimal path
    pub updates: Vec<Edit>,
}

impl ResultItem {
    /// Create a result item.
    pub fn new(word: String, dist: f64, updates: Vec<Edit>) -> Self {
        ResultItem {
            word,
            dist,
            updates,
        }
    }
}

impl fmt::Display for ResultItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResultItem(word='{}', dist={}, updates=[",
            self.word, self.dist
        )?;
        for (i, edit) in self.updates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edit)?;
        }
        write!(f, "])")
    }
}

/// All matches of one search, keyed by word.
///
/// Iteration follows the order in which the search emitted the matches.
/// Lookups of words that did not match return `None`; absence is not an error.
///
/// # Example
///
/// ```rust
/// use leven_search::prelude::*;
///
/// let trie = Trie::from_iter(vec!["test", "best"]);
/// let result = search(&trie, "test", &SearchConfig::new(1.0), &EditCostConfig::default()).unwrap();
///
/// assert!(result.is_in("best"));
/// assert_eq!(result.get_distance("test"), Some(0.0));
/// assert_eq!(result.get_distance("rest"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    items: Vec<ResultItem>,
    index: FxHashMap<String, usize>,
    complete: bool,
    visited_nodes: usize,
}

impl SearchResult {
    /// Create an empty, complete result set.
    pub fn new() -> Self {
        SearchResult {
            items: Vec::new(),
            index: FxHashMap::default(),
            complete: true,
            visited_nodes: 0,
        }
    }

    /// Record a match.
    ///
    /// A dictionary walk reports each word once. When a set is assembled by
    /// hand and the word is already present, the cheaper item is kept.
    pub fn add(&mut self, item: ResultItem) {
        match self.index.get(&item.word) {
            Some(&pos) => {
                if item.dist < self.items[pos].dist {
                    self.items[pos] = item;
                }
            }
            None => {
                self.index.insert(item.word.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Check if `word` matched.
    pub fn is_in(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Minimal distance of `word`, if it matched.
    pub fn get_distance(&self, word: &str) -> Option<f64> {
        self.get_result(word).map(|item| item.dist)
    }

    /// Full result item of `word`, if it matched.
    pub fn get_result(&self, word: &str) -> Option<&ResultItem> {
        self.index.get(word).map(|&pos| &self.items[pos])
    }

    /// Number of matched words
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the matches in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultItem> {
        self.items.iter()
    }

    /// Iterate over the matched words in emission order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.word.as_str())
    }

    /// Consume the set, returning items ordered by distance, then word.
    pub fn into_sorted(self) -> Vec<ResultItem> {
        let mut items = self.items;
        items.sort_by(|a, b| a.dist.total_cmp(&b.dist).then_with(|| a.word.cmp(&b.word)));
        items
    }

    /// False if a visit ceiling stopped the search early.
    ///
    /// An incomplete set is still correct for every word it holds.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of trie nodes the search visited.
    pub fn visited_nodes(&self) -> usize {
        self.visited_nodes
    }

    pub(crate) fn mark_incomplete(&mut self) {
        self.complete = false;
    }

    pub(crate) fn set_visited_nodes(&mut self, visited_nodes: usize) {
        self.visited_nodes = visited_nodes;
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a ResultItem;
    type IntoIter = std::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for SearchResult {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result:")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\t{}: {}", item.word, item)?;
        }
        Ok(())
    }
}
