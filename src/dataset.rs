//! Loading of the JSON data files, from disk or from the copies embedded at build time.

use std::path::Path;

use crate::error::QueryError;
use crate::filter::Tree;

/// Read and parse a dataset. The document root must be a JSON object.
pub fn load(path: &Path) -> Result<Tree, QueryError> {
    if !path.exists() {
        return Err(QueryError::DataSourceMissing {
            path: path.to_path_buf(),
        });
    }

    let contents =
        std::fs::read_to_string(path).map_err(|source| QueryError::DataSourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    parse(path, &contents)
}

/// Parse a dataset already in memory. `origin` is only used in error messages.
pub fn parse(origin: &Path, contents: &str) -> Result<Tree, QueryError> {
    serde_json::from_str(contents).map_err(|source| QueryError::DataSourceMalformed {
        path: origin.to_path_buf(),
        source,
    })
}
