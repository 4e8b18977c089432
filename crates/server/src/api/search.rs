//! Smart-search API handler.
//!
//! The one place where the nondeterministic relevance service meets the
//! deterministic catalog. Policy: ranked ids win when the service
//! produces any; an unconfigured, failing, or empty-handed service
//! degrades to the local text filter. The response says which path
//! answered so the UI can distinguish the two.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use gadkot_core::{summarize, FilterCriteria, Fort};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// "relevance" when the external ranking answered, "local" otherwise.
    pub method: String,
    pub forts: Vec<Fort>,
    pub total: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/search
///
/// Natural-language fort search with local fallback.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let query = body.query.trim().to_string();

    let ranked = match (state.relevance(), query.is_empty()) {
        // An empty query means "browse everything"; don't spend a model
        // call on it.
        (Some(relevance), false) => {
            let summaries = summarize(&state.catalog().filter(&FilterCriteria::default()));
            match relevance.rank(&query, &summaries).await {
                Ok(ids) => Some(ids),
                Err(e) => {
                    warn!(query = %query, error = %e, "relevance ranking unavailable, using local filter");
                    None
                }
            }
        }
        _ => None,
    };

    let (forts, method) = match ranked {
        Some(ids) if !ids.is_empty() => (state.catalog().resolve_ids(&ids), "relevance"),
        // Zero external matches degrade to the plain substring filter, the
        // same answer the directory gives while typing.
        _ => (
            state.catalog().filter(&FilterCriteria {
                text: Some(query.clone()),
                ..FilterCriteria::default()
            }),
            "local",
        ),
    };

    let total = forts.len();
    Json(SearchResponse {
        query,
        method: method.to_string(),
        forts,
        total,
    })
}
