//! Per-query search configuration.

use crate::error::{Result, SearchError};

/// Longest query accepted by default, in characters.
pub const DEFAULT_MAX_QUERY_LEN: usize = 1024;

/// Settings for one bounded search.
///
/// `max_distance` is the budget: a word matches when its cheapest edit path
/// costs at most this much. The other fields are host-imposed limits.
///
/// # Example
///
/// ```rust
/// use leven_search::SearchConfig;
///
/// let config = SearchConfig::new(2.0).with_visit_limit(10_000);
/// assert_eq!(config.max_distance, 2.0);
/// assert_eq!(config.visit_limit, Some(10_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Maximum total edit cost of a match. Defaults to 0 (exact match only).
    pub max_distance: f64,

    /// Stop after visiting this many trie nodes.
    ///
    /// A search cut short this way returns only the matches found so far and
    /// reports itself incomplete.
    pub visit_limit: Option<usize>,

    /// Reject queries longer than this many characters.
    pub max_query_len: usize,
}

impl SearchConfig {
    /// Create a configuration with the given budget and default limits.
    pub fn new(max_distance: f64) -> Self {
        SearchConfig {
            max_distance,
            ..Self::default()
        }
    }

    /// Set the budget.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the node-visit ceiling.
    pub fn with_visit_limit(mut self, visit_limit: usize) -> Self {
        self.visit_limit = Some(visit_limit);
        self
    }

    /// Set the maximum query length.
    pub fn with_max_query_len(mut self, max_query_len: usize) -> Self {
        self.max_query_len = max_query_len;
        self
    }

    /// Check the budget and the query length against this configuration.
    ///
    /// `+inf` is an acceptable budget (every word matches).
    pub fn validate(&self, query_len: usize) -> Result<()> {
        if self.max_distance.is_nan() || self.max_distance < 0.0 {
            return Err(SearchError::InvalidBudget(self.max_distance));
        }
        if query_len > self.max_query_len {
            return Err(SearchError::QueryTooLong {
                len: query_len,
                max: self.max_query_len,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_distance: 0.0,
            visit_limit: None,
            max_query_len: DEFAULT_MAX_QUERY_LEN,
        }
    }
}

impl From<f64> for SearchConfig {
    fn from(max_distance: f64) -> Self {
        SearchConfig::new(max_distance)
    }
}

impl From<u32> for SearchConfig {
    fn from(max_distance: u32) -> Self {
        SearchConfig::new(f64::from(max_distance))
    }
}
