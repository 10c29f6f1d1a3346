use std::path::{Path, PathBuf};

use pf_core::ports::{CatalogSourceError, CatalogSourcePort};
use pf_core::project::ProjectRecord;
use tracing::debug;

/// Reads the catalog from a JSON array of project records.
///
/// ```json
/// [
///   { "title": "PlatePal", "description": "Meal planning", "tags": ["Mobile"],
///     "links": [{ "label": "GitHub", "url": "https://github.com/tranade/platepal" }] }
/// ]
/// ```
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    /// Creates a source reading from `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSourcePort for JsonFileCatalogSource {
    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }

    /// Reads and parses the whole file.
    ///
    /// # Errors
    ///
    /// `CatalogSourceError::Io` if the file cannot be read (including when it
    /// does not exist), `CatalogSourceError::Parse` if it is not a JSON array
    /// of records.
    fn load(&self) -> Result<Vec<ProjectRecord>, CatalogSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            CatalogSourceError::Io(format!("read catalog failed: {}: {e}", self.path.display()))
        })?;

        let records: Vec<ProjectRecord> = serde_json::from_str(&content).map_err(|e| {
            CatalogSourceError::Parse(format!("{}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), records = records.len(), "Read catalog file");
        Ok(records)
    }
}
