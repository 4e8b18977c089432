use std::sync::Arc;

use gadkot_core::{Config, FortCatalog, RelevanceService, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn FortCatalog>,
    relevance: Option<Arc<dyn RelevanceService>>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<dyn FortCatalog>,
        relevance: Option<Arc<dyn RelevanceService>>,
    ) -> Self {
        Self {
            config,
            catalog,
            relevance,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn FortCatalog {
        self.catalog.as_ref()
    }

    pub fn relevance(&self) -> Option<&Arc<dyn RelevanceService>> {
        self.relevance.as_ref()
    }
}
