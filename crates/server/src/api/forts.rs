//! Fort catalog API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use gadkot_core::{
    CatalogError, CatalogStats, DifficultyFilter, FilterCriteria, Fort,
};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FortQueryParams {
    /// Case-insensitive substring over name or region.
    #[serde(default)]
    pub text: Option<String>,
    /// One of the four grades, or "All".
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Exact region name, or "All".
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FortListResponse {
    pub forts: Vec<Fort>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map query params to engine criteria.
///
/// The difficulty facet is a closed set, so an unknown token is the
/// client's mistake (400). Regions are data-driven; an unknown region
/// just matches nothing.
fn criteria_from_params(params: FortQueryParams) -> Result<FilterCriteria, CatalogError> {
    let difficulty = match params.difficulty.as_deref() {
        None | Some("All") => DifficultyFilter::All,
        Some(token) => DifficultyFilter::Only(token.parse()?),
    };

    Ok(FilterCriteria {
        text: params.text,
        difficulty,
        region: params.region,
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/forts
///
/// Filter the catalog by text, difficulty, and region.
pub async fn list_forts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FortQueryParams>,
) -> Result<Json<FortListResponse>, impl IntoResponse> {
    let criteria = match criteria_from_params(params) {
        Ok(criteria) => criteria,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    };

    let forts = state.catalog().filter(&criteria);
    let total = forts.len();
    Ok(Json(FortListResponse { forts, total }))
}

/// GET /api/v1/forts/regions
///
/// Distinct regions for the facet selector.
pub async fn list_regions(State(state): State<Arc<AppState>>) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: state.catalog().regions(),
    })
}

/// GET /api/v1/forts/stats
///
/// Catalog statistics.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<CatalogStats> {
    Json(state.catalog().stats())
}

/// GET /api/v1/forts/{id}
///
/// Get a specific fort by id.
pub async fn get_fort(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Fort>, impl IntoResponse> {
    match state.catalog().get(&id) {
        Ok(fort) => Ok(Json(fort)),
        Err(CatalogError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Fort not found: {id}"),
            }),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
