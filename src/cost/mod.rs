//! Edit operations and the weighted cost model.
//!
//! The search charges every substitution, insertion and deletion through an
//! [`EditCostConfig`]. Unlike the classic Levenshtein metric, individual edits
//! can be given their own cost:
//!
//! ```text
//! default:    1.0        every edit not listed below
//! x -> a :    0.1        common keyboard slip, nearly free
//! [-] q  :    0.5        stray trailing 'q' is cheap to drop
//! [+] i  :    2.0        missing 'i' is expensive to restore
//! ```
//!
//! Aligning a character with itself always costs zero and never shows up in
//! an edit trace.

mod config;
mod edit;

pub use config::{EditCostConfig, DEFAULT_EDIT_COST};
pub use edit::{Edit, EditCost};

#[cfg(feature = "serialization")]
pub(crate) use config::EditCostConfigRepr;
