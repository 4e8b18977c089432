//! Compact fort fixtures for tests.

use crate::catalog::{Coordinates, Difficulty, Fort};

/// Build a minimal fort record.
pub fn fort(id: &str, name: &str, region: &str) -> Fort {
    Fort {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        coordinates: Coordinates {
            lat: 18.3,
            lng: 73.7,
        },
        elevation_m: 1000,
        difficulty: Difficulty::Moderate,
        era: "Maratha Empire".to_string(),
        description: format!("{name} test record"),
        history: String::new(),
        best_months: "June - February".to_string(),
        distance_from_pune_km: 50,
        images: Vec::new(),
        extras: serde_json::Map::new(),
    }
}

/// Build a fort with an explicit grade and elevation.
pub fn graded_fort(
    id: &str,
    name: &str,
    region: &str,
    difficulty: Difficulty,
    elevation_m: u32,
) -> Fort {
    Fort {
        difficulty,
        elevation_m,
        ..fort(id, name, region)
    }
}

/// A four-fort sample catalog: two regions, three grades, names that
/// exercise the "gad" substring cases.
pub fn sample_forts() -> Vec<Fort> {
    vec![
        graded_fort(
            "sinhagad",
            "Sinhagad (सिंहगड)",
            "Pune",
            Difficulty::Moderate,
            1312,
        ),
        graded_fort("torna", "Torna (तोरणा)", "Pune", Difficulty::Hard, 1405),
        graded_fort(
            "raigad",
            "Raigad (रायगड)",
            "Raigad",
            Difficulty::Hard,
            820,
        ),
        graded_fort("korigad", "Korigad", "Pune", Difficulty::Easy, 929),
    ]
}
