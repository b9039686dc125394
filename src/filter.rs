//! Hierarchical exact-match filtering.
//!
//! A dataset is a JSON object nested one level per [`Dimension`]. Filtering
//! walks the dimensions in declared order and keeps only the branches whose
//! key equals the requested value at that depth. A branch that loses all of
//! its children is dropped, so the result never contains an empty object.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::QueryError;
use crate::vocabulary::Vocabulary;

/// A parsed dataset: top-level keys mapped to nested objects.
pub type Tree = Map<String, Value>;

/// One nesting depth of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    /// Command-line name, e.g. `layer`.
    pub key: &'static str,
    /// Label used in messages, e.g. `architecture layer`.
    pub label: &'static str,
    /// Plural used in the "Valid ..." guidance line.
    pub plural: &'static str,
    pub vocabulary: Vocabulary,
}

/// Optional filter values, one per dimension in declared order.
///
/// Empty strings count as "not supplied". Positions past the end are
/// unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria(Vec<Option<String>>);

impl FilterCriteria {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self(
            values
                .into_iter()
                .map(|v| v.filter(|s| !s.is_empty()))
                .collect(),
        )
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(|v| v.as_deref())
    }
}

/// The ordered dimensions of one dataset plus the noun used for an empty result.
#[derive(Debug, Clone, Copy)]
pub struct Hierarchy {
    /// Plural noun for what the dataset holds, e.g. `skills`.
    pub subject: &'static str,
    pub dimensions: &'static [Dimension],
}

impl Hierarchy {
    fn values<'c>(&self, criteria: &'c FilterCriteria) -> Vec<Option<&'c str>> {
        (0..self.dimensions.len()).map(|i| criteria.get(i)).collect()
    }

    /// Check every supplied value against its dimension's vocabulary.
    ///
    /// Runs before any data is read.
    pub fn validate(&self, criteria: &FilterCriteria) -> Result<(), QueryError> {
        for (dimension, value) in self.dimensions.iter().zip(self.values(criteria)) {
            if let Some(value) = value {
                dimension
                    .vocabulary
                    .validate(dimension.label, dimension.plural, value)?;
            }
        }
        Ok(())
    }

    /// Narrow `data` to the branches matching every supplied filter.
    ///
    /// Fails with [`QueryError::UnknownKey`] when the top-level value is not a
    /// key of `data`, and with [`QueryError::NoMatch`] when the filters
    /// together exclude everything. Key order and leaf values are preserved.
    pub fn filter(&self, data: &Tree, criteria: &FilterCriteria) -> Result<Tree, QueryError> {
        let values = self.values(criteria);

        if let (Some(top), Some(Some(wanted))) = (self.dimensions.first(), values.first()) {
            if !data.contains_key(*wanted) {
                debug!(dimension = top.key, value = *wanted, "Top-level key not in dataset");
                return Err(QueryError::UnknownKey {
                    label: top.label,
                    plural: top.plural,
                    value: wanted.to_string(),
                    valid: data.keys().cloned().collect(),
                });
            }
        }

        let result = prune(data, &values);
        debug!(
            total = data.len(),
            kept = result.len(),
            "Filtered {}",
            self.subject
        );

        if result.is_empty() {
            return Err(QueryError::NoMatch {
                subject: self.subject,
            });
        }
        Ok(result)
    }
}

/// Keep the children of `node` matching `criteria[0]`, recursing with the rest.
fn prune(node: &Tree, criteria: &[Option<&str>]) -> Tree {
    let Some((wanted, deeper)) = criteria.split_first() else {
        return node.clone();
    };
    let deeper_filtered = deeper.iter().any(Option::is_some);

    let mut kept = Map::new();
    for (key, child) in node {
        if matches!(wanted, Some(w) if *w != key.as_str()) {
            continue;
        }
        let child = match child {
            Value::Object(children) if !deeper.is_empty() => {
                let pruned = prune(children, deeper);
                if pruned.is_empty() {
                    continue;
                }
                Value::Object(pruned)
            }
            Value::Object(children) if children.is_empty() => continue,
            // A leaf above the terminal depth cannot satisfy a deeper filter.
            _ if deeper_filtered => continue,
            other => other.clone(),
        };
        kept.insert(key.clone(), child);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SKILLS, TASKS};
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn criteria(values: &[Option<&str>]) -> FilterCriteria {
        FilterCriteria::new(values.iter().map(|v| v.map(str::to_string)))
    }

    fn tasks() -> Tree {
        tree(json!({
            "Software": {
                "Ontwerpen": {"1": "s-o-1", "2": "s-o-2"},
                "Realiseren": {"1": "s-r-1", "3": "s-r-3"}
            },
            "Infrastructuur": {
                "Ontwerpen": {"2": "i-o-2"},
                "Analyseren": {"4": "i-a-4"}
            }
        }))
    }

    fn skills() -> Tree {
        tree(json!({
            "Plannen": {"1": "p-1", "3": "p-3"},
            "Samenwerken": {"2": "s-2", "4": "s-4"}
        }))
    }

    /// Every object in the tree has at least one key.
    fn assert_no_empty_branches(value: &Value) {
        if let Value::Object(map) = value {
            assert!(!map.is_empty(), "empty branch in output");
            map.values().for_each(assert_no_empty_branches);
        }
    }

    fn key_count(value: &Value) -> usize {
        match value {
            Value::Object(map) => map.len() + map.values().map(key_count).sum::<usize>(),
            _ => 0,
        }
    }

    #[test]
    fn no_filters_returns_dataset_unchanged() {
        let data = tasks();
        let out = TASKS.hierarchy.filter(&data, &FilterCriteria::default()).unwrap();
        assert_eq!(out, data);
        let out = SKILLS.hierarchy.filter(&skills(), &criteria(&[None, None])).unwrap();
        assert_eq!(out, skills());
    }

    #[test]
    fn single_branch_layer_filter_keeps_everything() {
        let data = tree(json!({"Software": {"Ontwerpen": {"2": "desc-A"}}}));
        let out = TASKS
            .hierarchy
            .filter(&data, &criteria(&[Some("Software")]))
            .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn absent_level_under_layer_is_no_match() {
        let data = tree(json!({"Software": {"Ontwerpen": {"2": "desc-A"}}}));
        let err = TASKS
            .hierarchy
            .filter(&data, &criteria(&[Some("Software"), None, Some("3")]))
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::NoMatch {
                subject: "professional tasks"
            }
        ));
    }

    #[test]
    fn skill_and_level_drop_other_skills_entirely() {
        let out = SKILLS
            .hierarchy
            .filter(&skills(), &criteria(&[Some("Samenwerken"), Some("2")]))
            .unwrap();
        assert_eq!(Value::Object(out), json!({"Samenwerken": {"2": "s-2"}}));
    }

    #[test]
    fn level_only_prunes_skills_without_that_level() {
        let out = SKILLS
            .hierarchy
            .filter(&skills(), &criteria(&[None, Some("3")]))
            .unwrap();
        assert_eq!(Value::Object(out), json!({"Plannen": {"3": "p-3"}}));
    }

    #[test]
    fn activity_missing_under_one_layer_prunes_that_layer() {
        let out = TASKS
            .hierarchy
            .filter(&tasks(), &criteria(&[None, Some("Realiseren")]))
            .unwrap();
        assert_eq!(
            Value::Object(out),
            json!({"Software": {"Realiseren": {"1": "s-r-1", "3": "s-r-3"}}})
        );
    }

    #[test]
    fn activity_and_level_across_layers() {
        let out = TASKS
            .hierarchy
            .filter(&tasks(), &criteria(&[None, Some("Ontwerpen"), Some("2")]))
            .unwrap();
        assert_eq!(
            Value::Object(out),
            json!({
                "Software": {"Ontwerpen": {"2": "s-o-2"}},
                "Infrastructuur": {"Ontwerpen": {"2": "i-o-2"}}
            })
        );
    }

    #[test]
    fn unknown_top_level_key_lists_dataset_keys() {
        let err = TASKS
            .hierarchy
            .filter(&tasks(), &criteria(&[Some("Hardwareinterfacing")]))
            .unwrap_err();
        match err {
            QueryError::UnknownKey { label, value, valid, .. } => {
                assert_eq!(label, "architecture layer");
                assert_eq!(value, "Hardwareinterfacing");
                assert_eq!(valid, vec!["Software", "Infrastructuur"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let err = SKILLS
            .hierarchy
            .filter(&skills(), &criteria(&[Some("samenwerken")]))
            .unwrap_err();
        assert!(matches!(err, QueryError::UnknownKey { .. }));
    }

    #[test]
    fn key_order_and_leaves_are_preserved() {
        let data = tree(json!({
            "Zeta": {"2": "z, met é en ë"},
            "Alpha": {"2": "a"},
            "Mid": {"1": "m"}
        }));
        let out = SKILLS.hierarchy.filter(&data, &criteria(&[None, Some("2")])).unwrap();
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
        assert_eq!(out["Zeta"]["2"], "z, met é en ë");
    }

    #[test]
    fn empty_branches_in_source_are_pruned() {
        let data = tree(json!({
            "Software": {"Ontwerpen": {}, "Realiseren": {"1": "r"}},
            "Infrastructuur": {}
        }));
        let out = TASKS.hierarchy.filter(&data, &FilterCriteria::default()).unwrap();
        assert_eq!(Value::Object(out), json!({"Software": {"Realiseren": {"1": "r"}}}));
    }

    #[test]
    fn early_leaf_is_kept_only_without_deeper_filters() {
        let data = tree(json!({"Software": {"Ontwerpen": "not nested", "Realiseren": {"1": "r"}}}));
        let out = TASKS.hierarchy.filter(&data, &FilterCriteria::default()).unwrap();
        assert_eq!(out, data);

        let out = TASKS
            .hierarchy
            .filter(&data, &criteria(&[None, None, Some("1")]))
            .unwrap();
        assert_eq!(Value::Object(out), json!({"Software": {"Realiseren": {"1": "r"}}}));
    }

    #[test]
    fn empty_string_filter_means_unfiltered() {
        let c = criteria(&[Some(""), Some(""), Some("")]);
        assert_eq!((c.get(0), c.get(1), c.get(2)), (None, None, None));
        assert_eq!(TASKS.hierarchy.filter(&tasks(), &c).unwrap(), tasks());
    }

    #[test]
    fn repeated_filtering_is_idempotent() {
        let c = criteria(&[None, Some("Ontwerpen"), Some("2")]);
        let once = TASKS.hierarchy.filter(&tasks(), &c).unwrap();
        let twice = TASKS.hierarchy.filter(&once, &c).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, TASKS.hierarchy.filter(&tasks(), &c).unwrap());
    }

    #[test]
    fn adding_a_filter_never_grows_the_result() {
        let combos: [[Option<&str>; 3]; 6] = [
            [None, None, None],
            [Some("Software"), None, None],
            [None, Some("Ontwerpen"), None],
            [None, None, Some("2")],
            [Some("Software"), Some("Ontwerpen"), None],
            [None, Some("Ontwerpen"), Some("2")],
        ];
        for base in combos {
            let wide = TASKS.hierarchy.filter(&tasks(), &criteria(&base)).unwrap();
            for (i, extra) in [Some("Software"), Some("Ontwerpen"), Some("2")].into_iter().enumerate() {
                if base[i].is_some() {
                    continue;
                }
                let mut narrower = base;
                narrower[i] = extra;
                if let Ok(narrow) = TASKS.hierarchy.filter(&tasks(), &criteria(&narrower)) {
                    assert!(narrow.len() <= wide.len());
                    assert!(
                        key_count(&Value::Object(narrow.clone()))
                            <= key_count(&Value::Object(wide.clone()))
                    );
                    assert_no_empty_branches(&Value::Object(narrow));
                }
            }
            assert_no_empty_branches(&Value::Object(wide));
        }
    }

    #[test]
    fn validate_rejects_values_outside_vocabulary() {
        let err = TASKS
            .hierarchy
            .validate(&criteria(&[Some("NotALayer")]))
            .unwrap_err();
        match err {
            QueryError::InvalidFilterValue { label, valid, .. } => {
                assert_eq!(label, "architecture layer");
                assert_eq!(valid.len(), 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = TASKS
            .hierarchy
            .validate(&criteria(&[Some("Software"), Some("Testen")]))
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidFilterValue { label: "activity", .. }
        ));

        assert!(SKILLS
            .hierarchy
            .validate(&criteria(&[Some("Reflecteren"), Some("4")]))
            .is_ok());
        assert!(SKILLS.hierarchy.validate(&criteria(&[None, Some("5")])).is_err());
    }
}
