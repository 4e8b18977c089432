//! Types for the fort catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trek difficulty grade.
///
/// Variants are declared in ascending severity so facet UIs can render
/// them in order; filtering treats them as an unordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All grades, in ascending severity.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Moderate" => Ok(Difficulty::Moderate),
            "Hard" => Ok(Difficulty::Hard),
            "Extreme" => Ok(Difficulty::Extreme),
            other => Err(CatalogError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Geographic position of a fort. Consumed by the map view only; the
/// catalog passes it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A fort record. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fort {
    /// Unique id, stable across sessions. The join key for external
    /// id-lists.
    pub id: String,
    /// Display name (often with Devanagari script).
    pub name: String,
    /// Region name. Open but small set of place names.
    pub region: String,
    pub coordinates: Coordinates,
    /// Summit elevation in meters. Sea forts use 0.
    pub elevation_m: u32,
    pub difficulty: Difficulty,
    /// Historical era label (e.g. "Maratha Capital (1648-1671)").
    pub era: String,
    pub description: String,
    pub history: String,
    /// Recommended visiting window (e.g. "June - February").
    pub best_months: String,
    pub distance_from_pune_km: u32,
    /// Image URLs for the detail page.
    #[serde(default)]
    pub images: Vec<String>,
    /// Auxiliary payload the catalog never inspects: references, plants,
    /// trail profile. Flattened so unknown fields survive a load/serve
    /// round trip.
    #[serde(flatten)]
    pub extras: serde_json::Map<String, serde_json::Value>,
}

/// Difficulty facet selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    /// Identity filter: no restriction.
    #[default]
    All,
    /// Exact-match restriction to a single grade.
    Only(Difficulty),
}

/// Criteria for a catalog query. All active criteria combine with AND;
/// the default value matches the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name OR region.
    /// Empty or whitespace-only matches everything.
    pub text: Option<String>,
    pub difficulty: DifficultyFilter,
    /// Exact region match. `None` or `"All"` is the identity filter.
    pub region: Option<String>,
}

impl FilterCriteria {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Catalog statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total forts in the catalog.
    pub total_forts: usize,
    /// Distinct regions.
    pub total_regions: usize,
    /// Fort count per difficulty grade, in ascending severity.
    pub by_difficulty: Vec<DifficultyCount>,
    /// Name and elevation of the highest fort, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<HighestFort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighestFort {
    pub id: String,
    pub name: String,
    pub elevation_m: u32,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Fort not found: {0}")]
    NotFound(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in Difficulty::ALL {
            let parsed: Difficulty = d.as_str().parse().unwrap();
            assert_eq!(parsed, d);
        }
    }

    #[test]
    fn test_difficulty_unknown_token() {
        let err = "Vertical".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDifficulty(_)));
        assert_eq!(err.to_string(), "Unknown difficulty: Vertical");
    }

    #[test]
    fn test_difficulty_serializes_as_display_name() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Moderate).unwrap(),
            "\"Moderate\""
        );
    }

    #[test]
    fn test_fort_extras_survive_round_trip() {
        let json = r#"{
            "id": "sinhagad",
            "name": "Sinhagad",
            "region": "Pune",
            "coordinates": { "lat": 18.366, "lng": 73.755 },
            "elevation_m": 1312,
            "difficulty": "Moderate",
            "era": "Maratha Empire",
            "description": "Site of Tanaji's last battle.",
            "history": "Renamed from Kondhana.",
            "best_months": "June - February",
            "distance_from_pune_km": 35,
            "images": [],
            "plants": ["p1", "p2"],
            "trail_profile": [{ "distance": 0, "elevation": 700 }]
        }"#;

        let fort: Fort = serde_json::from_str(json).unwrap();
        assert_eq!(fort.id, "sinhagad");
        assert!(fort.extras.contains_key("plants"));
        assert!(fort.extras.contains_key("trail_profile"));

        let out = serde_json::to_value(&fort).unwrap();
        assert_eq!(out["plants"], serde_json::json!(["p1", "p2"]));
        assert_eq!(out["trail_profile"][0]["elevation"], 700);
    }

    #[test]
    fn test_default_criteria_is_all_identity() {
        let criteria = FilterCriteria::default();
        assert!(criteria.text.is_none());
        assert_eq!(criteria.difficulty, DifficultyFilter::All);
        assert!(criteria.region.is_none());
    }
}
