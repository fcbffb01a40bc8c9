//! # leven-search
//!
//! Fuzzy word lookup with per-character, per-operation edit costs.
//!
//! Words are stored in a character trie. A query walks the trie depth-first
//! while computing one row of the weighted edit-distance table per node,
//! dropping every subtree whose row already exceeds the budget. Each match is
//! reported with its minimal cost and the edits that realize it.
//!
//! Edit costs are not uniform: a substitution, insertion or deletion of a
//! specific character may carry its own cost, overriding a default.
//!
//! ## Example
//!
//! ```rust
//! use leven_search::prelude::*;
//!
//! let mut index = LevenSearch::new();
//! index.extend(["panoramas", "pajamas", "mathematician"]);
//!
//! let costs = EditCostConfig::granular(10.0, vec![EditCost::substitute('x', 'a', 1.0)]);
//! let result = index
//!     .find_dist("pxnorxmxsy", &SearchConfig::new(20.0), costs, None)
//!     .unwrap();
//!
//! let item = result.get_result("panoramas").unwrap();
//! assert_eq!(item.dist, 13.0);
//! assert_eq!(item.updates.last(), Some(&Edit::delete('y')));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod cost;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod facade;
pub mod result;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use config::SearchConfig;
pub use cost::{Edit, EditCost, EditCostConfig};
pub use error::{Result, SearchError};
pub use facade::{CostSpec, LevenSearch};
pub use result::{ResultItem, SearchResult};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::SearchConfig;
    pub use crate::cost::{Edit, EditCost, EditCostConfig};
    pub use crate::dictionary::{Dictionary, DictionaryNode, Trie};
    pub use crate::distance::{weighted_alignment, weighted_distance};
    pub use crate::error::SearchError;
    pub use crate::facade::{CostSpec, LevenSearch};
    pub use crate::result::{ResultItem, SearchResult};
    pub use crate::search::{search, search_from};
}
