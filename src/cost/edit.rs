//! Edit operations and cost entries.

use std::fmt;

/// A single character edit turning a query into a vocabulary word.
///
/// `source` characters come from the query, `target` characters from the
/// matched word:
///
/// ```text
/// Substitute(s, t):  query 's' becomes word 't'
/// Insert(t):         word 't' has no counterpart in the query
/// Delete(s):         query 's' has no counterpart in the word
/// ```
///
/// Matching characters are never represented as edits; the search emits
/// `Substitute` only for differing characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", rename_all = "snake_case")
)]
pub enum Edit {
    /// Replace a query character with a different word character.
    Substitute {
        /// Character in the query
        source: char,
        /// Character in the word
        target: char,
    },
    /// Add a word character absent from the query.
    Insert {
        /// Character in the word
        target: char,
    },
    /// Drop a query character absent from the word.
    Delete {
        /// Character in the query
        source: char,
    },
}

impl Edit {
    /// Create a substitution of `source` by `target`.
    #[inline]
    pub const fn substitute(source: char, target: char) -> Self {
        Edit::Substitute { source, target }
    }

    /// Create an insertion of `target`.
    #[inline]
    pub const fn insert(target: char) -> Self {
        Edit::Insert { target }
    }

    /// Create a deletion of `source`.
    #[inline]
    pub const fn delete(source: char) -> Self {
        Edit::Delete { source }
    }

    /// Query-side character, if the edit consumes one.
    pub fn source(&self) -> Option<char> {
        match *self {
            Edit::Substitute { source, .. } | Edit::Delete { source } => Some(source),
            Edit::Insert { .. } => None,
        }
    }

    /// Word-side character, if the edit produces one.
    pub fn target(&self) -> Option<char> {
        match *self {
            Edit::Substitute { target, .. } | Edit::Insert { target } => Some(target),
            Edit::Delete { .. } => None,
        }
    }

    /// Check if this is a substitution
    pub fn is_substitution(&self) -> bool {
        matches!(self, Edit::Substitute { .. })
    }

    /// Check if this is an insertion
    pub fn is_insertion(&self) -> bool {
        matches!(self, Edit::Insert { .. })
    }

    /// Check if this is a deletion
    pub fn is_deletion(&self) -> bool {
        matches!(self, Edit::Delete { .. })
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Substitute { source, target } => write!(f, "{} -> {}", source, target),
            Edit::Insert { target } => write!(f, "[+] {}", target),
            Edit::Delete { source } => write!(f, "[-] {}", source),
        }
    }
}

/// An edit paired with the cost it should be charged.
///
/// # Examples
///
/// ```rust
/// use leven_search::cost::{Edit, EditCost};
///
/// let entry = EditCost::substitute('x', 'a', 1.0);
/// assert_eq!(entry.to_string(), "x -> a : 1");
///
/// let from_trace = EditCost::from_edit(Edit::delete('q'), 2.0);
/// assert_eq!(from_trace.to_string(), "[-] q : 2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EditCost {
    /// The edit this entry applies to
    #[cfg_attr(feature = "serialization", serde(flatten))]
    pub edit: Edit,
    /// Cost charged for the edit
    pub cost: f64,
}

impl EditCost {
    /// Pair an existing edit with a cost.
    ///
    /// Typically used to feed an edit from a search trace back in as an
    /// override.
    #[inline]
    pub const fn from_edit(edit: Edit, cost: f64) -> Self {
        EditCost { edit, cost }
    }

    /// Cost entry for substituting `source` by `target`.
    pub const fn substitute(source: char, target: char, cost: f64) -> Self {
        Self::from_edit(Edit::substitute(source, target), cost)
    }

    /// Cost entry for inserting `target`.
    pub const fn insert(target: char, cost: f64) -> Self {
        Self::from_edit(Edit::insert(target), cost)
    }

    /// Cost entry for deleting `source`.
    pub const fn delete(source: char, cost: f64) -> Self {
        Self::from_edit(Edit::delete(source), cost)
    }
}

impl From<(Edit, f64)> for EditCost {
    fn from((edit, cost): (Edit, f64)) -> Self {
        EditCost::from_edit(edit, cost)
    }
}

impl fmt::Display for EditCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.edit, self.cost)
    }
}
