//! Error types for index queries and cost configuration.

use thiserror::Error;

use crate::cost::Edit;

/// Errors raised at the search boundary, before any traversal work starts.
///
/// The walk itself has no failure states; everything here is a rejected
/// argument.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// The cost configuration value has a shape that cannot be interpreted.
    ///
    /// Only raised when resolving dynamic input (e.g. JSON); typed callers go
    /// through [`CostSpec`](crate::CostSpec) and cannot hit it.
    #[error("edit_cost must be a list or EditCost object, got {found}")]
    InvalidCostShape {
        /// Description of the value that was supplied
        found: String,
    },

    /// An override entry carries a negative, NaN or infinite cost.
    #[error("Cost for edit '{edit}' must be a finite non-negative number, got {cost}")]
    InvalidCost {
        /// The edit whose cost was rejected
        edit: Edit,
        /// The rejected cost
        cost: f64,
    },

    /// The default cost is negative, NaN or infinite.
    #[error("Default cost must be a finite non-negative number, got {0}")]
    InvalidDefaultCost(f64),

    /// The search budget is negative or NaN.
    #[error("Maximum distance must be a non-negative number, got {0}")]
    InvalidBudget(f64),

    /// The query has more characters than the configured limit.
    #[error("Query is {len} characters long, the limit is {max}")]
    QueryTooLong {
        /// Length of the rejected query, in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },
}

/// A specialized `Result` type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
