//! The two query engines: HBO-I professional tasks and student skills.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::dataset;
use crate::error::QueryError;
use crate::filter::{Dimension, FilterCriteria, Hierarchy, Tree};
use crate::vocabulary::{ACTIVITIES, LAYERS, LEVELS, SKILLS as SKILL_NAMES};

pub const LAYER: Dimension = Dimension {
    key: "layer",
    label: "architecture layer",
    plural: "layers",
    vocabulary: LAYERS,
};

pub const ACTIVITY: Dimension = Dimension {
    key: "activity",
    label: "activity",
    plural: "activities",
    vocabulary: ACTIVITIES,
};

pub const SKILL: Dimension = Dimension {
    key: "skill",
    label: "skill",
    plural: "skills",
    vocabulary: SKILL_NAMES,
};

pub const LEVEL: Dimension = Dimension {
    key: "level",
    label: "level",
    plural: "levels",
    vocabulary: LEVELS,
};

/// Professional tasks: `layer -> activity -> level -> description`.
pub const TASKS: QueryEngine = QueryEngine {
    name: "hboi",
    data_file: "hboi-nl.json",
    bundled: include_str!("../data/hboi-nl.json"),
    hierarchy: Hierarchy {
        subject: "professional tasks",
        dimensions: &[LAYER, ACTIVITY, LEVEL],
    },
};

/// Student skills: `skill -> level -> description`.
pub const SKILLS: QueryEngine = QueryEngine {
    name: "vaardigheden",
    data_file: "vaardigheden-nl.json",
    bundled: include_str!("../data/vaardigheden-nl.json"),
    hierarchy: Hierarchy {
        subject: "skills",
        dimensions: &[SKILL, LEVEL],
    },
};

/// A dataset file bound to the dimensions it is nested by.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine {
    pub name: &'static str,
    /// File name inside the data directory.
    pub data_file: &'static str,
    /// Copy of `data/<data_file>` embedded at build time.
    pub bundled: &'static str,
    pub hierarchy: Hierarchy,
}

impl QueryEngine {
    /// Validate, load and filter in one pass.
    ///
    /// Vocabulary errors are returned before the data file is touched.
    pub fn query(&self, config: &Config, criteria: &FilterCriteria) -> Result<Tree, QueryError> {
        self.hierarchy.validate(criteria)?;

        let data = self.load(config)?;
        self.check_drift(&data);
        self.hierarchy.filter(&data, criteria)
    }

    /// Read the data file from the configured directory, or the embedded copy.
    pub fn load(&self, config: &Config) -> Result<Tree, QueryError> {
        let data = match config.data_path(self.data_file) {
            Some(path) => {
                let data = dataset::load(&path)?;
                debug!(engine = self.name, path = %path.display(), "Loaded {} top-level entries", data.len());
                data
            }
            None => {
                let data = dataset::parse(Path::new(self.data_file), self.bundled)?;
                debug!(engine = self.name, "Loaded {} embedded top-level entries", data.len());
                data
            }
        };
        Ok(data)
    }

    /// Warn when the top-level vocabulary no longer mirrors the dataset.
    fn check_drift(&self, data: &Tree) {
        let Some(top) = self.hierarchy.dimensions.first() else {
            return;
        };
        let drift = top.vocabulary.drift(data.keys().map(String::as_str));
        if !drift.is_empty() {
            warn!(
                engine = self.name,
                dimension = top.key,
                missing = ?drift.missing,
                unlisted = ?drift.unlisted,
                "Vocabulary for {} differs from the top-level keys of {}",
                top.key,
                self.data_file
            );
        }
    }
}
