//! Shared types for relevance operations.

use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, Fort};

/// The catalog projection sent to the relevance service.
///
/// Deliberately lighter than [`Fort`]: enough for the model to judge
/// relevance, small enough to keep prompt size and latency down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortSummary {
    pub id: String,
    pub name: String,
    pub region: String,
    pub difficulty: Difficulty,
    pub description: String,
    /// Free-text hints: visiting window and era.
    pub tags: String,
}

impl From<&Fort> for FortSummary {
    fn from(fort: &Fort) -> Self {
        Self {
            id: fort.id.clone(),
            name: fort.name.clone(),
            region: fort.region.clone(),
            difficulty: fort.difficulty,
            description: fort.description.clone(),
            tags: format!("{} {}", fort.best_months, fort.era),
        }
    }
}

/// Project a whole catalog for a ranking call.
pub fn summarize(forts: &[Fort]) -> Vec<FortSummary> {
    forts.iter().map(FortSummary::from).collect()
}
