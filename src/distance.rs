//! Direct weighted edit distance between two strings.
//!
//! Runs the same row recurrence as the dictionary search, one target
//! character at a time, so the distance and the trace agree exactly with what
//! [`search`](crate::search::search) reports for the same pair.

use crate::cost::EditCostConfig;
use crate::error::Result;
use crate::result::ResultItem;
use crate::search::RowBuilder;

/// Minimal weighted cost of turning `query` into `word`.
///
/// # Example
///
/// ```rust
/// use leven_search::cost::{EditCost, EditCostConfig};
/// use leven_search::distance::weighted_distance;
///
/// let costs = EditCostConfig::granular(5.0, vec![EditCost::delete('x', 1.0)]);
/// assert_eq!(weighted_distance("mathematiciaxn", "mathematician", &costs).unwrap(), 1.0);
/// assert_eq!(weighted_distance("kitten", "sitting", &EditCostConfig::default()).unwrap(), 3.0);
/// ```
///
/// # Errors
///
/// Fails if `costs` holds a negative or non-finite cost.
pub fn weighted_distance(query: &str, word: &str, costs: &EditCostConfig) -> Result<f64> {
    weighted_alignment(query, word, costs).map(|item| item.dist)
}

/// Minimal weighted cost of turning `query` into `word`, with its edit trace.
///
/// # Errors
///
/// Fails if `costs` holds a negative or non-finite cost.
pub fn weighted_alignment(query: &str, word: &str, costs: &EditCostConfig) -> Result<ResultItem> {
    costs.validate()?;

    let rows = RowBuilder::new(query, costs);
    let row = word
        .chars()
        .fold(rows.root(), |row, label| rows.step(&row, label));

    let cell = row.last();
    Ok(ResultItem::new(word.to_string(), cell.cost, cell.trace.to_vec()))
}
