//! Fixed vocabularies of the Open-ICT framework.
//!
//! These lists mirror the keys of the bundled data files. They are used to
//! reject bad filter values before any data is read; the loaded dataset stays
//! the source of truth for what actually exists (see [`Vocabulary::drift`]).

use crate::error::QueryError;

/// Architecture layers of the HBO-I matrix.
pub const LAYERS: Vocabulary = Vocabulary(&[
    "Gebruikersinteractie",
    "Organisatieprocessen",
    "Infrastructuur",
    "Software",
    "Hardwareinterfacing",
]);

/// Professional activities of the HBO-I matrix.
pub const ACTIVITIES: Vocabulary = Vocabulary(&[
    "Analyseren",
    "Adviseren",
    "Ontwerpen",
    "Realiseren",
    "Manage & Control",
]);

/// Student skills ("vaardigheden").
pub const SKILLS: Vocabulary = Vocabulary(&[
    "Juiste kennis ontwikkelen",
    "Kwalitatief product maken",
    "Overzicht creëren",
    "Kritisch oordelen",
    "Samenwerken",
    "Boodschap delen",
    "Plannen",
    "Flexibel opstellen",
    "Pro-actief handelen",
    "Reflecteren",
]);

/// Proficiency levels, shared by both datasets.
pub const LEVELS: Vocabulary = Vocabulary(&["1", "2", "3", "4"]);

/// An ordered set of accepted values for one filterable dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary(pub &'static [&'static str]);

/// Keys that differ between a vocabulary and a loaded dataset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Drift {
    /// In the vocabulary but absent from the dataset.
    pub missing: Vec<String>,
    /// In the dataset but not in the vocabulary.
    pub unlisted: Vec<String>,
}

impl Drift {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unlisted.is_empty()
    }
}

impl Vocabulary {
    pub fn values(&self) -> &'static [&'static str] {
        self.0
    }

    /// Exact membership: no trimming, no case folding.
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| *v == value)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().map(|v| v.to_string()).collect()
    }

    /// Accept `value` unchanged or reject it with the full list of valid values.
    pub fn validate<'a>(
        &self,
        label: &'static str,
        plural: &'static str,
        value: &'a str,
    ) -> Result<&'a str, QueryError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(QueryError::InvalidFilterValue {
                label,
                plural,
                value: value.to_string(),
                valid: self.to_vec(),
            })
        }
    }

    /// Compare this vocabulary with the keys actually present in a dataset.
    pub fn drift<'k, I>(&self, keys: I) -> Drift
    where
        I: IntoIterator<Item = &'k str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        Drift {
            missing: self
                .0
                .iter()
                .filter(|v| !keys.contains(*v))
                .map(|v| v.to_string())
                .collect(),
            unlisted: keys
                .iter()
                .filter(|k| !self.contains(k))
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_value() {
        assert_eq!(LAYERS.validate("layer", "layers", "Software").unwrap(), "Software");
        assert_eq!(
            ACTIVITIES
                .validate("activity", "activities", "Manage & Control")
                .unwrap(),
            "Manage & Control"
        );
    }

    #[test]
    fn rejects_case_and_whitespace_variants() {
        for candidate in ["software", "SOFTWARE", " Software", "Software ", "Soft"] {
            let err = LAYERS
                .validate("architecture layer", "layers", candidate)
                .unwrap_err();
            match err {
                QueryError::InvalidFilterValue { value, valid, .. } => {
                    assert_eq!(value, candidate);
                    assert_eq!(valid.len(), 5);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn non_ascii_values_match_exactly() {
        assert!(SKILLS.contains("Overzicht creëren"));
        assert!(!SKILLS.contains("Overzicht creeren"));
    }

    #[test]
    fn drift_reports_both_directions() {
        let drift = LEVELS.drift(["1", "2", "5"]);
        assert_eq!(drift.missing, vec!["3", "4"]);
        assert_eq!(drift.unlisted, vec!["5"]);
        assert!(!drift.is_empty());
        assert!(LEVELS.drift(["4", "3", "2", "1"]).is_empty());
    }
}
