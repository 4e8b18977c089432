pub mod catalog;
pub mod config;
pub mod metrics;
pub mod planner;
pub mod relevance;
pub mod source;
pub mod testing;

pub use catalog::{
    CatalogError, CatalogStats, Coordinates, Difficulty, DifficultyFilter, FilterCriteria, Fort,
    FortCatalog, MemoryCatalog,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    SanitizedConfig, ServerConfig,
};
pub use metrics::register_core_metrics;
pub use planner::{estimate, PlannerError, TransportMode, TripParams, TripPlan};
pub use relevance::{
    summarize, FortSummary, GeminiClient, LlmClient, LlmRanker, RelevanceConfig, RelevanceError,
    RelevanceProvider, RelevanceService,
};
pub use source::{EmbeddedSource, FortDataSource, JsonFileSource, SourceError};
