//! Bounded, cost-weighted fuzzy search over a dictionary.
//!
//! The search walks the dictionary depth-first while computing one row of the
//! weighted edit-distance table per visited node (see [`row`]). A subtree is
//! abandoned as soon as every cell of its row exceeds the budget: costs are
//! non-negative, so extending the prefix can never bring a row back under it.
//!
//! The walk uses an explicit stack instead of recursion, which keeps stack
//! usage flat for arbitrarily long dictionary words and makes a visit ceiling a
//! simple check between pops.
//!
//! # Example
//!
//! ```rust
//! use leven_search::prelude::*;
//!
//! let trie = Trie::from_iter(vec!["panoramas", "pajamas"]);
//! let costs = EditCostConfig::granular(10.0, vec![EditCost::substitute('x', 'a', 1.0)]);
//!
//! let result = search(&trie, "pxnorxmxsy", &SearchConfig::new(20.0), &costs).unwrap();
//! assert_eq!(result.get_distance("panoramas"), Some(13.0));
//! ```

mod row;

use log::{debug, trace};

use crate::config::SearchConfig;
use crate::cost::EditCostConfig;
use crate::dictionary::{Dictionary, DictionaryNode};
use crate::error::Result;
use crate::result::{ResultItem, SearchResult};

pub(crate) use row::{Row, RowBuilder};

/// Find every word of `dictionary` within `config.max_distance` of `query`.
///
/// `query` is used as-is; case folding is the caller's concern.
///
/// # Errors
///
/// Fails before touching the dictionary if the budget is negative or NaN, a
/// cost is negative or not finite, or the query exceeds
/// `config.max_query_len` characters.
pub fn search<D: Dictionary>(
    dictionary: &D,
    query: &str,
    config: &SearchConfig,
    costs: &EditCostConfig,
) -> Result<SearchResult> {
    search_from(dictionary.root(), query, config, costs)
}

/// Same as [`search`], starting from an arbitrary node.
///
/// Words are reported relative to `root`, so starting below the dictionary
/// root searches the suffixes under that prefix.
pub fn search_from<N: DictionaryNode>(
    root: N,
    query: &str,
    config: &SearchConfig,
    costs: &EditCostConfig,
) -> Result<SearchResult> {
    let query_len = query.chars().count();
    config.validate(query_len)?;
    costs.validate()?;

    Ok(BoundedSearch::new(query, config, costs).run(root))
}

/// Pending node on the walk.
struct Frame<N> {
    node: N,
    depth: usize,
    label: Option<char>,
    row: Row,
}

/// Counters reported when a search finishes.
#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    visited: usize,
    pruned: usize,
    emitted: usize,
}

/// A validated search, ready to walk.
struct BoundedSearch<'c> {
    rows: RowBuilder<'c>,
    budget: f64,
    visit_limit: Option<usize>,
}

impl<'c> BoundedSearch<'c> {
    fn new(query: &str, config: &SearchConfig, costs: &'c EditCostConfig) -> Self {
        BoundedSearch {
            rows: RowBuilder::new(query, costs),
            budget: config.max_distance,
            visit_limit: config.visit_limit,
        }
    }

    fn run<N: DictionaryNode>(&self, root: N) -> SearchResult {
        let mut result = SearchResult::new();
        let mut stats = SearchStats::default();
        let mut path: Vec<char> = Vec::new();
        let mut children: Vec<Frame<N>> = Vec::new();

        let mut stack = vec![Frame {
            node: root,
            depth: 0,
            label: None,
            row: self.rows.root(),
        }];

        while let Some(frame) = stack.pop() {
            if let Some(limit) = self.visit_limit {
                if stats.visited >= limit {
                    debug!(
                        "Visit limit {} reached with {} frames pending",
                        limit,
                        stack.len() + 1
                    );
                    result.mark_incomplete();
                    break;
                }
            }
            stats.visited += 1;

            path.truncate(frame.depth.saturating_sub(1));
            if let Some(label) = frame.label {
                path.push(label);
            }

            if frame.node.is_final() {
                let cell = frame.row.last();
                if cell.cost <= self.budget {
                    let word: String = path.iter().collect();
                    trace!("Match '{}' at distance {}", word, cell.cost);
                    result.add(ResultItem::new(word, cell.cost, cell.trace.to_vec()));
                    stats.emitted += 1;
                }
            }

            for (label, child) in frame.node.edges() {
                let row = self.rows.step(&frame.row, label);
                if row.min_cost() > self.budget {
                    stats.pruned += 1;
                    continue;
                }
                children.push(Frame {
                    node: child,
                    depth: frame.depth + 1,
                    label: Some(label),
                    row,
                });
            }
            // Reversed so that siblings are visited in edge order.
            stack.extend(children.drain(..).rev());
        }

        debug!(
            "Search for {}-char query (budget {}): visited {} nodes, pruned {} subtrees, {} matches",
            self.rows.query_len(),
            self.budget,
            stats.visited,
            stats.pruned,
            stats.emitted
        );

        result.set_visited_nodes(stats.visited);
        result
    }
}
