//! Cost configuration: a default cost plus per-edit overrides.

use std::fmt;

use rustc_hash::FxHashMap;

use super::edit::{Edit, EditCost};
use crate::error::{Result, SearchError};

/// Default cost applied when nothing else is configured.
pub const DEFAULT_EDIT_COST: f64 = 1.0;

/// Resolves the cost of individual edits.
///
/// A configuration holds a default cost and an ordered list of [`EditCost`]
/// overrides. Overrides are keyed by the edit itself (kind plus the
/// characters involved); when the same edit is registered twice the later
/// entry wins. Every edit without an override costs the default.
///
/// The uniform Levenshtein metric is the degenerate case with no overrides and
/// a default cost of 1, which is what [`EditCostConfig::default`] returns.
///
/// # Examples
///
/// ```rust
/// use leven_search::cost::{Edit, EditCost, EditCostConfig};
///
/// let costs = EditCostConfig::granular(10.0, vec![EditCost::substitute('x', 'a', 1.0)]);
///
/// assert_eq!(costs.cost_of(&Edit::substitute('x', 'a')), 1.0);
/// assert_eq!(costs.cost_of(&Edit::substitute('a', 'x')), 10.0);
/// assert_eq!(costs.cost_between('t', 't'), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "EditCostConfigRepr", into = "EditCostConfigRepr")
)]
pub struct EditCostConfig {
    default_cost: f64,
    entries: Vec<EditCost>,
    overrides: FxHashMap<Edit, f64>,
}

impl EditCostConfig {
    /// Create a configuration where every edit costs `default_cost`.
    pub fn uniform(default_cost: f64) -> Self {
        EditCostConfig {
            default_cost,
            entries: Vec::new(),
            overrides: FxHashMap::default(),
        }
    }

    /// Create a configuration with a default cost and an override list.
    pub fn granular<I>(default_cost: f64, edit_costs: I) -> Self
    where
        I: IntoIterator<Item = EditCost>,
    {
        let mut config = Self::uniform(default_cost);
        config.extend(edit_costs);
        config
    }

    /// Create a configuration from overrides alone; the default cost is 1.
    pub fn from_edit_costs<I>(edit_costs: I) -> Self
    where
        I: IntoIterator<Item = EditCost>,
    {
        Self::granular(DEFAULT_EDIT_COST, edit_costs)
    }

    /// Register an override, replacing any earlier entry for the same edit.
    pub fn push(&mut self, edit_cost: EditCost) {
        self.overrides.insert(edit_cost.edit, edit_cost.cost);
        self.entries.push(edit_cost);
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with_override(mut self, edit_cost: EditCost) -> Self {
        self.push(edit_cost);
        self
    }

    /// Replace the default cost, keeping all overrides.
    pub fn set_default_cost(&mut self, default_cost: f64) {
        self.default_cost = default_cost;
    }

    /// Builder-style variant of [`set_default_cost`](Self::set_default_cost).
    pub fn with_default_cost(mut self, default_cost: f64) -> Self {
        self.default_cost = default_cost;
        self
    }

    /// Cost charged for edits without an override.
    pub fn default_cost(&self) -> f64 {
        self.default_cost
    }

    /// Registered overrides, in registration order (duplicates included).
    pub fn edit_costs(&self) -> &[EditCost] {
        &self.entries
    }

    /// Check if any override is registered
    pub fn is_uniform(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the cost of an edit.
    #[inline]
    pub fn cost_of(&self, edit: &Edit) -> f64 {
        if self.overrides.is_empty() {
            return self.default_cost;
        }
        self.overrides
            .get(edit)
            .copied()
            .unwrap_or(self.default_cost)
    }

    /// Cost of aligning query character `source` with word character `target`.
    ///
    /// Equal characters are free, whatever overrides say.
    #[inline]
    pub fn cost_between(&self, source: char, target: char) -> f64 {
        if source == target {
            0.0
        } else {
            self.cost_of(&Edit::substitute(source, target))
        }
    }

    /// Sum the cost of an edit trace.
    pub fn total_cost<'a, I>(&self, edits: I) -> f64
    where
        I: IntoIterator<Item = &'a Edit>,
    {
        edits.into_iter().map(|edit| self.cost_of(edit)).sum()
    }

    /// Reject negative, NaN or infinite costs.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidDefaultCost`] for a bad default
    /// - [`SearchError::InvalidCost`] for the first bad override
    pub fn validate(&self) -> Result<()> {
        if !is_valid_cost(self.default_cost) {
            return Err(SearchError::InvalidDefaultCost(self.default_cost));
        }
        if let Some(bad) = self.entries.iter().find(|entry| !is_valid_cost(entry.cost)) {
            return Err(SearchError::InvalidCost {
                edit: bad.edit,
                cost: bad.cost,
            });
        }
        Ok(())
    }
}

#[inline]
fn is_valid_cost(cost: f64) -> bool {
    cost.is_finite() && cost >= 0.0
}

impl Default for EditCostConfig {
    fn default() -> Self {
        Self::uniform(DEFAULT_EDIT_COST)
    }
}

impl Extend<EditCost> for EditCostConfig {
    fn extend<I: IntoIterator<Item = EditCost>>(&mut self, edit_costs: I) {
        for edit_cost in edit_costs {
            self.push(edit_cost);
        }
    }
}

impl FromIterator<EditCost> for EditCostConfig {
    fn from_iter<I: IntoIterator<Item = EditCost>>(edit_costs: I) -> Self {
        Self::from_edit_costs(edit_costs)
    }
}

impl fmt::Display for EditCostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GranularEditCost:")?;
        write!(f, "\n\tdefault_cost: {}", self.default_cost)?;
        write!(f, "\n\tletter cost: ")?;
        for entry in &self.entries {
            write!(f, "\n\t\t{}", entry)?;
        }
        Ok(())
    }
}

/// Wire form: the override table is rebuilt from the entry list on load.
#[cfg(feature = "serialization")]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EditCostConfigRepr {
    #[serde(default = "default_edit_cost")]
    pub(crate) default_cost: f64,
    #[serde(default)]
    pub(crate) edit_costs: Vec<EditCost>,
}

#[cfg(feature = "serialization")]
fn default_edit_cost() -> f64 {
    DEFAULT_EDIT_COST
}

#[cfg(feature = "serialization")]
impl From<EditCostConfigRepr> for EditCostConfig {
    fn from(repr: EditCostConfigRepr) -> Self {
        EditCostConfig::granular(repr.default_cost, repr.edit_costs)
    }
}

#[cfg(feature = "serialization")]
impl From<EditCostConfig> for EditCostConfigRepr {
    fn from(config: EditCostConfig) -> Self {
        EditCostConfigRepr {
            default_cost: config.default_cost,
            edit_costs: config.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uniform_one() {
        let costs = EditCostConfig::default();
        assert_eq!(costs.default_cost(), 1.0);
        assert!(costs.is_uniform());
        assert_eq!(costs.cost_of(&Edit::insert('a')), 1.0);
        assert_eq!(costs.cost_of(&Edit::delete('a')), 1.0);
        assert_eq!(costs.cost_of(&Edit::substitute('a', 'b')), 1.0);
    }

    #[test]
    fn test_override_lookup() {
        let costs = EditCostConfig::granular(
            5.0,
            vec![EditCost::delete('x', 1.0), EditCost::insert('i', 2.0)],
        );
        assert_eq!(costs.cost_of(&Edit::delete('x')), 1.0);
        assert_eq!(costs.cost_of(&Edit::insert('i')), 2.0);
        // Same character, different operation: falls back to the default
        assert_eq!(costs.cost_of(&Edit::insert('x')), 5.0);
        assert_eq!(costs.cost_of(&Edit::delete('i')), 5.0);
    }

    #[test]
    fn test_last_registration_wins() {
        let costs = EditCostConfig::uniform(10.0)
            .with_override(EditCost::substitute('x', 'a', 3.0))
            .with_override(EditCost::substitute('x', 'a', 1.0));
        assert_eq!(costs.cost_of(&Edit::substitute('x', 'a')), 1.0);
        assert_eq!(costs.edit_costs().len(), 2);
    }

    #[test]
    fn test_equal_characters_are_free() {
        let costs = EditCostConfig::granular(5.0, vec![EditCost::substitute('t', 't', 1000.0)]);
        assert_eq!(costs.cost_between('t', 't'), 0.0);
        assert_eq!(costs.cost_between('t', 'u'), 5.0);
    }

    #[test]
    fn test_default_cost_override_keeps_entries() {
        let mut costs = EditCostConfig::from_edit_costs(vec![EditCost::delete('x', 1.0)]);
        assert_eq!(costs.default_cost(), 1.0);
        costs.set_default_cost(2.0);
        assert_eq!(costs.default_cost(), 2.0);
        assert_eq!(costs.cost_of(&Edit::delete('x')), 1.0);
        assert_eq!(costs.cost_of(&Edit::delete('y')), 2.0);
    }

    #[test]
    fn test_total_cost() {
        let costs = EditCostConfig::granular(10.0, vec![EditCost::substitute('x', 'a', 1.0)]);
        let trace = [
            Edit::substitute('x', 'a'),
            Edit::substitute('x', 'a'),
            Edit::delete('y'),
        ];
        assert_eq!(costs.total_cost(&trace), 12.0);
    }

    #[test]
    fn test_validate() {
        assert!(EditCostConfig::default().validate().is_ok());
        assert!(EditCostConfig::uniform(0.0).validate().is_ok());

        assert_eq!(
            EditCostConfig::uniform(-1.0).validate(),
            Err(SearchError::InvalidDefaultCost(-1.0))
        );
        assert!(EditCostConfig::uniform(f64::NAN).validate().is_err());
        assert!(EditCostConfig::uniform(f64::INFINITY).validate().is_err());

        let bad = EditCostConfig::granular(1.0, vec![EditCost::insert('a', -0.5)]);
        assert_eq!(
            bad.validate(),
            Err(SearchError::InvalidCost {
                edit: Edit::insert('a'),
                cost: -0.5
            })
        );
    }

    #[test]
    fn test_display_granular() {
        let costs = EditCostConfig::granular(
            25.0,
            vec![
                EditCost::delete('x', 1.0),
                EditCost::insert('i', 2.0),
                EditCost::substitute('w', 't', 5.0),
            ],
        );
        let expected = [
            "GranularEditCost:",
            "\tdefault_cost: 25",
            "\tletter cost: ",
            "\t\t[-] x : 1",
            "\t\t[+] i : 2",
            "\t\tw -> t : 5",
        ]
        .join("\n");
        assert_eq!(costs.to_string(), expected);
    }

    #[test]
    fn test_display_uniform() {
        let costs = EditCostConfig::uniform(1.5);
        assert_eq!(
            costs.to_string(),
            "GranularEditCost:\n\tdefault_cost: 1.5\n\tletter cost: "
        );
    }

    #[test]
    fn test_from_iterator() {
        let costs: EditCostConfig = vec![EditCost::insert('a', 0.5)].into_iter().collect();
        assert_eq!(costs.default_cost(), 1.0);
        assert_eq!(costs.cost_of(&Edit::insert('a')), 0.5);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_json_roundtrip_rebuilds_overrides() {
        let costs = EditCostConfig::granular(10.0, vec![EditCost::substitute('x', 'a', 1.0)]);
        let json = serde_json::to_string(&costs).unwrap();
        let loaded: EditCostConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, costs);
        assert_eq!(loaded.cost_of(&Edit::substitute('x', 'a')), 1.0);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_json_default_cost_falls_back_to_one() {
        let loaded: EditCostConfig = serde_json::from_str(
            r#"{"edit_costs": [{"op": "insert", "target": "i", "cost": 1}]}"#,
        )
        .unwrap();
        assert_eq!(loaded.default_cost(), 1.0);
        assert_eq!(loaded.cost_of(&Edit::insert('i')), 1.0);
        assert_eq!(loaded.cost_of(&Edit::insert('j')), 1.0);
    }
}
