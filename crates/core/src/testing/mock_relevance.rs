//! Mock relevance service for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::relevance::{FortSummary, RelevanceError, RelevanceService};

/// A recorded ranking call for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRanking {
    /// The free-text query that was ranked.
    pub query: String,
    /// How many summaries were offered to the service.
    pub catalog_size: usize,
}

/// Mock implementation of the RelevanceService trait.
///
/// Provides controllable behavior for testing:
/// - Return a scripted id-list
/// - Track ranking calls for assertions
/// - Simulate a failure on the next call
///
/// # Example
///
/// ```rust,ignore
/// use gadkot_core::testing::MockRelevance;
///
/// let relevance = MockRelevance::new();
/// relevance.set_ids(vec!["sinhagad".into()]).await;
///
/// let ids = relevance.rank("easy forts", &summaries).await?;
/// assert_eq!(ids, vec!["sinhagad"]);
///
/// let calls = relevance.recorded_rankings().await;
/// assert_eq!(calls[0].query, "easy forts");
/// ```
#[derive(Debug, Default)]
pub struct MockRelevance {
    /// Scripted ids to return.
    ids: Arc<RwLock<Vec<String>>>,
    /// Recorded ranking calls.
    rankings: Arc<RwLock<Vec<RecordedRanking>>>,
    /// If set, the next call fails with this error.
    next_error: Arc<RwLock<Option<RelevanceError>>>,
}

impl MockRelevance {
    /// Create a new mock that answers every query with an empty id-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the id-list returned by subsequent calls.
    pub async fn set_ids(&self, ids: Vec<String>) {
        *self.ids.write().await = ids;
    }

    /// Make the next call fail with the given error.
    pub async fn fail_next(&self, error: RelevanceError) {
        *self.next_error.write().await = Some(error);
    }

    /// All ranking calls made so far.
    pub async fn recorded_rankings(&self) -> Vec<RecordedRanking> {
        self.rankings.read().await.clone()
    }
}

#[async_trait]
impl RelevanceService for MockRelevance {
    fn name(&self) -> &str {
        "mock"
    }

    async fn rank(
        &self,
        query: &str,
        catalog: &[FortSummary],
    ) -> Result<Vec<String>, RelevanceError> {
        self.rankings.write().await.push(RecordedRanking {
            query: query.to_string(),
            catalog_size: catalog.len(),
        });

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.ids.read().await.clone())
    }
}
