//! JSON file data source.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::Fort;
use crate::source::{check_unique_ids, FortDataSource, SourceError};

/// Data source reading a fort collection from a JSON document on disk.
///
/// The document is an array of fort records in browse order; unknown
/// per-record fields are preserved as passthrough payload.
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FortDataSource for JsonFileSource {
    fn load_all(&self) -> Result<Vec<Fort>, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::FileNotFound(self.path.display().to_string()));
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| SourceError::Io(e.to_string()))?;
        let forts: Vec<Fort> =
            serde_json::from_str(&raw).map_err(|e| SourceError::Parse(e.to_string()))?;
        check_unique_ids(&forts)?;

        info!(forts = forts.len(), path = %self.path.display(), "loaded fort dataset from file");
        Ok(forts)
    }
}
