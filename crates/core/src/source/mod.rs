//! Fort data source - supplies the catalog collection at startup.
//!
//! The source is read exactly once; after that the catalog owns the data
//! for the process lifetime. Two sources exist: the embedded dataset
//! shipped with the crate, and an operator-provided JSON file.

mod embedded;
mod json_file;

pub use embedded::EmbeddedSource;
pub use json_file::JsonFileSource;

use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::Fort;

/// Errors for data source loading. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Fort data file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read fort data: {0}")]
    Io(String),

    #[error("Failed to parse fort data: {0}")]
    Parse(String),

    #[error("Duplicate fort id: {0}")]
    DuplicateId(String),
}

/// Trait for fort data sources.
pub trait FortDataSource {
    /// Load the full fort collection, in catalog order.
    ///
    /// Called exactly once at startup.
    fn load_all(&self) -> Result<Vec<Fort>, SourceError>;
}

/// Reject collections with duplicate ids.
///
/// Id uniqueness is the invariant every merge and lookup relies on, so it
/// is enforced here on every load path rather than trusted to the data.
pub(crate) fn check_unique_ids(forts: &[Fort]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(forts.len());
    for fort in forts {
        if !seen.insert(fort.id.as_str()) {
            return Err(SourceError::DuplicateId(fort.id.clone()));
        }
    }
    Ok(())
}
