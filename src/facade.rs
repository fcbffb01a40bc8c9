//! Case-insensitive word index with weighted fuzzy lookup.
//!
//! [`LevenSearch`] wraps a [`Trie`] and the bounded search behind the
//! interface most callers want: words are lowercased on the way in, and the
//! cost model can be given in whichever form is handy ([`CostSpec`]).

use log::debug;

use crate::config::SearchConfig;
use crate::cost::{EditCost, EditCostConfig};
use crate::dictionary::{Dictionary, Trie};
use crate::error::Result;
use crate::result::SearchResult;
use crate::search::search;

/// The accepted shapes of a cost configuration argument.
///
/// Every variant resolves to a single [`EditCostConfig`] before the search
/// runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CostSpec {
    /// Nothing supplied: every edit costs 1.
    #[default]
    Default,
    /// Every edit costs the given amount.
    Uniform(f64),
    /// Overrides on top of a default cost of 1.
    List(Vec<EditCost>),
    /// A fully built configuration.
    Config(EditCostConfig),
}

impl CostSpec {
    /// Resolve to a configuration.
    ///
    /// `default_cost`, when given, replaces whatever default the variant carries.
    pub fn resolve(self, default_cost: Option<f64>) -> EditCostConfig {
        let mut config = match self {
            CostSpec::Default => EditCostConfig::default(),
            CostSpec::Uniform(cost) => EditCostConfig::uniform(cost),
            CostSpec::List(edit_costs) => EditCostConfig::from_edit_costs(edit_costs),
            CostSpec::Config(config) => config,
        };
        if let Some(default_cost) = default_cost {
            config.set_default_cost(default_cost);
        }
        config
    }

    /// Interpret a dynamically typed value.
    ///
    /// - `null` → [`CostSpec::Default`]
    /// - number → [`CostSpec::Uniform`]
    /// - array of edit-cost objects → [`CostSpec::List`]
    /// - object with `default_cost` and/or `edit_costs` → [`CostSpec::Config`]
    ///
    /// # Errors
    ///
    /// Any other value, or an array/object whose contents do not parse, is
    /// rejected with [`SearchError::InvalidCostShape`](crate::SearchError::InvalidCostShape).
    #[cfg(feature = "serialization")]
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use crate::cost::EditCostConfigRepr;
        use crate::error::SearchError;
        use serde_json::Value;

        let invalid = |found: String| SearchError::InvalidCostShape { found };

        match value {
            Value::Null => Ok(CostSpec::Default),
            Value::Number(n) => n
                .as_f64()
                .map(CostSpec::Uniform)
                .ok_or_else(|| invalid(format!("number {}", n))),
            Value::Array(_) => serde_json::from_value::<Vec<EditCost>>(value.clone())
                .map(CostSpec::List)
                .map_err(|e| invalid(format!("array ({})", e))),
            Value::Object(_) => serde_json::from_value::<EditCostConfigRepr>(value.clone())
                .map(|repr| CostSpec::Config(repr.into()))
                .map_err(|e| invalid(format!("object ({})", e))),
            Value::Bool(b) => Err(invalid(format!("bool {}", b))),
            Value::String(s) => Err(invalid(format!("string {:?}", s))),
        }
    }
}

impl From<f64> for CostSpec {
    fn from(cost: f64) -> Self {
        CostSpec::Uniform(cost)
    }
}

impl From<u32> for CostSpec {
    fn from(cost: u32) -> Self {
        CostSpec::Uniform(f64::from(cost))
    }
}

impl From<Vec<EditCost>> for CostSpec {
    fn from(edit_costs: Vec<EditCost>) -> Self {
        CostSpec::List(edit_costs)
    }
}

impl From<EditCostConfig> for CostSpec {
    fn from(config: EditCostConfig) -> Self {
        CostSpec::Config(config)
    }
}

impl From<Option<EditCostConfig>> for CostSpec {
    fn from(config: Option<EditCostConfig>) -> Self {
        config.map(CostSpec::Config).unwrap_or_default()
    }
}

/// A lowercased word index answering exact and fuzzy queries.
///
/// Insert the whole vocabulary first, then query. Queries only read the
/// index, so a populated `LevenSearch` can be shared between threads.
///
/// # Example
///
/// ```rust
/// use leven_search::prelude::*;
///
/// let mut index = LevenSearch::new();
/// for word in ["Panoramas", "mathematician"] {
///     index.insert(word);
/// }
///
/// assert!(index.find("PANORAMAS"));
///
/// let result = index
///     .find_dist("panoramasq", &SearchConfig::new(10.0), 10.0, None)
///     .unwrap();
/// assert_eq!(result.get_distance("panoramas"), Some(10.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LevenSearch {
    trie: Trie,
}

impl LevenSearch {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word (lowercased). Adding it again has no effect.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(&word.to_lowercase());
    }

    /// Check if the lowercased word is in the index.
    pub fn find(&self, word: &str) -> bool {
        self.trie.contains(&word.to_lowercase())
    }

    /// Find every indexed word within `config.max_distance` of `word`.
    ///
    /// `costs` accepts anything convertible into a [`CostSpec`]: a number, a
    /// list of [`EditCost`]s, an [`EditCostConfig`], or `CostSpec::Default`.
    /// `default_cost` overrides the default carried by `costs`.
    ///
    /// # Errors
    ///
    /// See [`search`]; nothing is walked when the arguments are rejected.
    pub fn find_dist<C: Into<CostSpec>>(
        &self,
        word: &str,
        config: &SearchConfig,
        costs: C,
        default_cost: Option<f64>,
    ) -> Result<SearchResult> {
        let query = word.to_lowercase();
        let costs = costs.into().resolve(default_cost);
        debug!(
            "find_dist '{}' max_distance={} default_cost={} overrides={}",
            query,
            config.max_distance,
            costs.default_cost(),
            costs.edit_costs().len()
        );
        search(&self.trie, &query, config, &costs)
    }

    /// Number of distinct indexed words
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl<S: AsRef<str>> Extend<S> for LevenSearch {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LevenSearch {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut index = LevenSearch::new();
        index.extend(words);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Edit;

    fn index() -> LevenSearch {
        ["The", "Halfway", "Government", "panoramas", "mathematician"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_insert_lowercases() {
        let index = index();
        assert!(index.find("government"));
        assert!(index.find("GOVERNMENT"));
        assert!(index.trie().contains("government"));
        assert!(!index.trie().contains("Government"));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_find_dist_lowercases_query() {
        let result = index()
            .find_dist("Governgent", &SearchConfig::new(1.0), CostSpec::Default, None)
            .unwrap();
        assert_eq!(result.get_distance("government"), Some(1.0));
        assert!(!result.is_in("Government"));
    }

    #[test]
    fn test_default_budget_is_exact() {
        let result = index()
            .find_dist("halfwya", &SearchConfig::default(), CostSpec::Default, None)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_resolve_variants() {
        assert_eq!(CostSpec::Default.resolve(None), EditCostConfig::default());
        assert_eq!(CostSpec::Uniform(10.0).resolve(None).default_cost(), 10.0);

        let listed = CostSpec::List(vec![EditCost::delete('x', 1.0)]).resolve(None);
        assert_eq!(listed.default_cost(), 1.0);
        assert_eq!(listed.cost_of(&Edit::delete('x')), 1.0);

        let config = EditCostConfig::granular(25.0, vec![EditCost::insert('i', 2.0)]);
        assert_eq!(CostSpec::Config(config.clone()).resolve(None), config);
    }

    #[test]
    fn test_explicit_default_cost_wins() {
        let config = EditCostConfig::granular(25.0, vec![EditCost::insert('i', 2.0)]);
        let resolved = CostSpec::from(config).resolve(Some(3.0));
        assert_eq!(resolved.default_cost(), 3.0);
        assert_eq!(resolved.cost_of(&Edit::insert('i')), 2.0);

        assert_eq!(CostSpec::Uniform(10.0).resolve(Some(4.0)).default_cost(), 4.0);
        assert_eq!(CostSpec::Default.resolve(Some(0.5)).default_cost(), 0.5);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(CostSpec::from(10u32), CostSpec::Uniform(10.0));
        assert_eq!(CostSpec::from(2.5), CostSpec::Uniform(2.5));
        assert_eq!(CostSpec::from(None::<EditCostConfig>), CostSpec::Default);
        assert_eq!(
            CostSpec::from(vec![EditCost::insert('a', 1.0)]),
            CostSpec::List(vec![EditCost::insert('a', 1.0)])
        );
    }

    #[cfg(feature = "serialization")]
    mod json {
        use super::*;
        use crate::error::SearchError;
        use serde_json::json;

        #[test]
        fn test_from_json_shapes() {
            assert_eq!(CostSpec::from_json(&json!(null)).unwrap(), CostSpec::Default);
            assert_eq!(CostSpec::from_json(&json!(10)).unwrap(), CostSpec::Uniform(10.0));

            let list = CostSpec::from_json(&json!([
                {"op": "delete", "source": "x", "cost": 1},
                {"op": "insert", "target": "i", "cost": 1}
            ]))
            .unwrap();
            assert_eq!(
                list,
                CostSpec::List(vec![EditCost::delete('x', 1.0), EditCost::insert('i', 1.0)])
            );

            let config = CostSpec::from_json(&json!({
                "default_cost": 10,
                "edit_costs": [{"op": "substitute", "source": "x", "target": "a", "cost": 1}]
            }))
            .unwrap();
            assert_eq!(
                config,
                CostSpec::Config(EditCostConfig::granular(
                    10.0,
                    vec![EditCost::substitute('x', 'a', 1.0)]
                ))
            );
        }

        #[test]
        fn test_from_json_rejects_unknown_shapes() {
            for value in [json!("whatever"), json!(true), json!({"colour": "red"})] {
                let err = CostSpec::from_json(&value).unwrap_err();
                assert!(matches!(err, SearchError::InvalidCostShape { .. }));
                assert!(err
                    .to_string()
                    .contains("edit_cost must be a list or EditCost object"));
            }
        }
    }
}
