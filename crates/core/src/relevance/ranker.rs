//! LLM-powered relevance ranker.
//!
//! Sends the user's query plus a compact catalog index to the model and
//! parses back a JSON array of fort ids.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::metrics::{RELEVANCE_CALLS, RELEVANCE_DURATION};
use crate::relevance::llm::{CompletionRequest, LlmClient};
use crate::relevance::traits::{RelevanceError, RelevanceService};
use crate::relevance::types::FortSummary;

/// Configuration for the LLM ranker.
#[derive(Debug, Clone)]
pub struct LlmRankerConfig {
    /// Maximum tokens for the LLM response.
    pub max_tokens: u32,
    /// Temperature for generation.
    pub temperature: f32,
}

impl Default for LlmRankerConfig {
    fn default() -> Self {
        Self {
            max_tokens: 512,
            temperature: 0.0, // Ranking should be reproducible
        }
    }
}

/// Relevance service backed by an LLM.
///
/// Generic over the client type to support different backends.
pub struct LlmRanker<C: LlmClient> {
    client: Arc<C>,
    config: LlmRankerConfig,
}

impl<C: LlmClient> LlmRanker<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            config: LlmRankerConfig::default(),
        }
    }

    pub fn with_config(client: Arc<C>, config: LlmRankerConfig) -> Self {
        Self { client, config }
    }

    fn build_system_prompt() -> String {
        r#"You match trekking queries against a database of Sahyadri mountain forts.

RULES:
1. If the user asks for "easy forts", match on difficulty "Easy"; likewise for other grades.
2. If the user names a place ("near Pune"), match on region.
3. Otherwise look for keywords in the description and tags.
4. Order ids best match first.

Respond with a JSON array of id strings only, e.g. ["sinhagad", "torna"].
If nothing matches, respond with []."#
            .to_string()
    }

    fn build_user_prompt(
        query: &str,
        catalog: &[FortSummary],
    ) -> Result<String, RelevanceError> {
        let index = serde_json::to_string(catalog)
            .map_err(|e| RelevanceError::Llm(format!("failed to serialize catalog: {e}")))?;
        Ok(format!(
            "User Query: \"{query}\"\n\nDatabase of Forts: {index}"
        ))
    }

    /// Strip Markdown code fences some models wrap around JSON output.
    fn strip_fences(text: &str) -> &str {
        let trimmed = text.trim();
        let Some(inner) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let inner = inner.strip_prefix("json").unwrap_or(inner);
        inner.strip_suffix("```").unwrap_or(inner).trim()
    }

    fn parse_ids(text: &str) -> Result<Vec<String>, RelevanceError> {
        serde_json::from_str(Self::strip_fences(text))
            .map_err(|e| RelevanceError::MalformedResponse(format!("{e}: {text}")))
    }
}

#[async_trait]
impl<C: LlmClient> RelevanceService for LlmRanker<C> {
    fn name(&self) -> &str {
        "llm"
    }

    async fn rank(
        &self,
        query: &str,
        catalog: &[FortSummary],
    ) -> Result<Vec<String>, RelevanceError> {
        let request = CompletionRequest::new(Self::build_user_prompt(query, catalog)?)
            .with_system(Self::build_system_prompt())
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature)
            .with_json_output();

        let start = Instant::now();
        let response = self.client.complete(request).await.map_err(|e| {
            warn!(provider = self.client.provider(), error = %e, "ranking call failed");
            RELEVANCE_CALLS.with_label_values(&["error"]).inc();
            RelevanceError::Llm(e.to_string())
        })?;
        RELEVANCE_DURATION.observe(start.elapsed().as_secs_f64());

        let ids = Self::parse_ids(&response.text).inspect_err(|_| {
            RELEVANCE_CALLS.with_label_values(&["malformed"]).inc();
        })?;

        debug!(
            model = self.client.model(),
            matches = ids.len(),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "ranking call completed"
        );
        RELEVANCE_CALLS
            .with_label_values(&[if ids.is_empty() { "empty" } else { "matched" }])
            .inc();

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relevance::llm::{CompletionResponse, LlmError, LlmUsage};
    use crate::relevance::types::summarize;
    use crate::testing::fixtures;

    /// Client returning a canned completion.
    struct CannedClient {
        text: String,
    }

    #[async_trait]
    impl LlmClient for CannedClient {
        fn provider(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }

        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                text: self.text.clone(),
                usage: LlmUsage::default(),
                model: "canned-1".to_string(),
            })
        }
    }

    fn ranker(text: &str) -> LlmRanker<CannedClient> {
        LlmRanker::new(Arc::new(CannedClient {
            text: text.to_string(),
        }))
    }

    #[tokio::test]
    async fn test_rank_parses_id_array() {
        let catalog = summarize(&fixtures::sample_forts());
        let ids = ranker(r#"["sinhagad", "torna"]"#)
            .rank("easy forts", &catalog)
            .await
            .unwrap();
        assert_eq!(ids, vec!["sinhagad", "torna"]);
    }

    #[tokio::test]
    async fn test_rank_strips_code_fences() {
        let catalog = summarize(&fixtures::sample_forts());
        let ids = ranker("```json\n[\"raigad\"]\n```")
            .rank("capital fort", &catalog)
            .await
            .unwrap();
        assert_eq!(ids, vec!["raigad"]);
    }

    #[tokio::test]
    async fn test_rank_empty_array_is_ok() {
        let catalog = summarize(&fixtures::sample_forts());
        let ids = ranker("[]").rank("underwater forts", &catalog).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_rank_rejects_prose() {
        let catalog = summarize(&fixtures::sample_forts());
        let err = ranker("I think Sinhagad fits best.")
            .rank("easy forts", &catalog)
            .await
            .unwrap_err();
        assert!(matches!(err, RelevanceError::MalformedResponse(_)));
    }

    #[test]
    fn test_user_prompt_embeds_catalog_index() {
        let catalog = summarize(&fixtures::sample_forts());
        let prompt =
            LlmRanker::<CannedClient>::build_user_prompt("easy forts", &catalog).unwrap();
        assert!(prompt.contains("\"easy forts\""));
        assert!(prompt.contains("\"id\":\"sinhagad\""));
    }
}
