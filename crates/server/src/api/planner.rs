//! Trip planner API handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use gadkot_core::{planner, TripParams, TripPlan};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /api/v1/planner/estimate
///
/// Estimate trip costs for a group.
pub async fn estimate(
    Json(params): Json<TripParams>,
) -> Result<Json<TripPlan>, impl IntoResponse> {
    match planner::estimate(&params) {
        Ok(plan) => Ok(Json(plan)),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
