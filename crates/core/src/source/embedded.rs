//! The dataset shipped with the crate.

use tracing::info;

use crate::catalog::Fort;
use crate::source::{check_unique_ids, FortDataSource, SourceError};

/// The Sahyadri fort records compiled into the binary.
const FORTS_JSON: &str = include_str!("../../data/forts.json");

/// Data source backed by the embedded dataset.
///
/// Used when no `data_path` is configured; keeps the server usable with
/// zero external files.
#[derive(Debug, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl FortDataSource for EmbeddedSource {
    fn load_all(&self) -> Result<Vec<Fort>, SourceError> {
        let forts: Vec<Fort> =
            serde_json::from_str(FORTS_JSON).map_err(|e| SourceError::Parse(e.to_string()))?;
        check_unique_ids(&forts)?;
        info!(forts = forts.len(), "loaded embedded fort dataset");
        Ok(forts)
    }
}
