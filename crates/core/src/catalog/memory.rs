//! In-memory catalog implementation.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{
    CatalogError, CatalogStats, Difficulty, DifficultyCount, DifficultyFilter, FilterCriteria,
    Fort, FortCatalog, HighestFort,
};
use crate::metrics::CATALOG_QUERIES;

/// The fort catalog, held in memory for the process lifetime.
///
/// Constructed once from whatever the data source loaded and handed to
/// the component that composes the application. Holds no other state, so
/// any number of concurrent callers can query it without coordination.
pub struct MemoryCatalog {
    forts: Vec<Fort>,
    index: HashMap<String, usize>,
}

impl MemoryCatalog {
    /// Build a catalog from an ordered fort collection.
    ///
    /// Insertion order is the browse order every query preserves. Callers
    /// are expected to have validated id uniqueness at load time; if a
    /// duplicate slips through, the first record wins.
    pub fn new(forts: Vec<Fort>) -> Self {
        let mut index = HashMap::with_capacity(forts.len());
        for (pos, fort) in forts.iter().enumerate() {
            index.entry(fort.id.clone()).or_insert(pos);
        }
        Self { forts, index }
    }

    fn matches(fort: &Fort, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let hit = fort.name.to_lowercase().contains(needle)
                || fort.region.to_lowercase().contains(needle);
            if !hit {
                return false;
            }
        }

        if let DifficultyFilter::Only(grade) = criteria.difficulty {
            if fort.difficulty != grade {
                return false;
            }
        }

        if let Some(region) = criteria.region.as_deref() {
            if region != "All" && fort.region != region {
                return false;
            }
        }

        true
    }
}

impl FortCatalog for MemoryCatalog {
    fn filter(&self, criteria: &FilterCriteria) -> Vec<Fort> {
        // Whitespace-only text is the identity filter.
        let needle = criteria
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        let results: Vec<Fort> = self
            .forts
            .iter()
            .filter(|fort| Self::matches(fort, criteria, needle.as_deref()))
            .cloned()
            .collect();

        debug!(
            matched = results.len(),
            total = self.forts.len(),
            "catalog filter"
        );
        CATALOG_QUERIES
            .with_label_values(&[if results.is_empty() { "empty" } else { "matched" }])
            .inc();

        results
    }

    fn resolve_ids(&self, ids: &[String]) -> Vec<Fort> {
        // Catalog order, not external order; unknowns dropped, duplicates
        // collapsed by the position index.
        let mut positions: Vec<usize> = ids
            .iter()
            .filter_map(|id| self.index.get(id.as_str()).copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();

        let dropped = ids.len() - positions.len();
        if dropped > 0 {
            debug!(dropped, "merge dropped unresolvable or duplicate ids");
        }

        positions.into_iter().map(|pos| self.forts[pos].clone()).collect()
    }

    fn get(&self, id: &str) -> Result<Fort, CatalogError> {
        self.index
            .get(id)
            .map(|&pos| self.forts[pos].clone())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn regions(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for fort in &self.forts {
            if !seen.contains(&fort.region) {
                seen.push(fort.region.clone());
            }
        }
        seen
    }

    fn stats(&self) -> CatalogStats {
        let by_difficulty = Difficulty::ALL
            .into_iter()
            .map(|difficulty| DifficultyCount {
                difficulty,
                count: self
                    .forts
                    .iter()
                    .filter(|f| f.difficulty == difficulty)
                    .count(),
            })
            .collect();

        let highest = self
            .forts
            .iter()
            .max_by_key(|f| f.elevation_m)
            .map(|f| HighestFort {
                id: f.id.clone(),
                name: f.name.clone(),
                elevation_m: f.elevation_m,
            });

        CatalogStats {
            total_forts: self.forts.len(),
            total_regions: self.regions().len(),
            by_difficulty,
            highest,
        }
    }

    fn len(&self) -> usize {
        self.forts.len()
    }
}
