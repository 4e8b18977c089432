//! Traits for relevance service implementations.

use async_trait::async_trait;
use thiserror::Error;

use crate::relevance::types::FortSummary;

/// Errors that can occur while obtaining an external ranking.
///
/// Every variant means the same thing to callers: no external ranking is
/// available for this query, fall back to local filtering.
#[derive(Debug, Error)]
pub enum RelevanceError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Malformed ranking response: {0}")]
    MalformedResponse(String),

    #[error("Relevance service not configured")]
    NotConfigured,
}

/// Trait for services that rank the catalog against a free-text query.
///
/// Implementations return fort ids only; resolution against the catalog
/// (and the handling of unknown ids) belongs to the caller.
#[async_trait]
pub trait RelevanceService: Send + Sync {
    /// Name of this service for logging.
    fn name(&self) -> &str;

    /// Rank the catalog against the query.
    ///
    /// Returns matching fort ids, best match first. An empty list is a
    /// valid answer meaning "nothing matched"; how to respond to that is
    /// the caller's policy, not this service's.
    async fn rank(
        &self,
        query: &str,
        catalog: &[FortSummary],
    ) -> Result<Vec<String>, RelevanceError>;
}
