//! External relevance service - natural-language fort ranking.
//!
//! The catalog's "smart search" is a call to an external generative model:
//! it receives the user's query plus a compact catalog summary and returns
//! the ids of matching forts. Nothing semantic happens in-process; the
//! returned id-list is folded back through the catalog's merge primitive,
//! so all nondeterminism stays behind this one seam.

mod config;
mod llm;
mod ranker;
mod traits;
mod types;

pub use config::{RelevanceConfig, RelevanceProvider};
pub use llm::{CompletionRequest, CompletionResponse, GeminiClient, LlmClient, LlmError, LlmUsage};
pub use ranker::{LlmRanker, LlmRankerConfig};
pub use traits::{RelevanceError, RelevanceService};
pub use types::{summarize, FortSummary};
