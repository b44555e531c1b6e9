use std::sync::Arc;

use greenlane_core::config::{AppConfig, ConfigError, LoadOptions};
use greenlane_core::{AlternativesResolver, OfflineSearch, SimilaritySearch};
use greenlane_vectorai::{VectorAiClient, VectorAiError};
use thiserror::Error;
use tracing::info;

pub type SharedResolver = Arc<AlternativesResolver<Arc<dyn SimilaritySearch>>>;

pub struct Application {
    pub config: AppConfig,
    pub resolver: SharedResolver,
    pub vector_client: Option<Arc<VectorAiClient>>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("vector search client setup failed: {0}")]
    VectorSearch(#[source] VectorAiError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let (search, vector_client) = if config.vector_search.enabled {
        let client = Arc::new(
            VectorAiClient::from_config(&config.vector_search)
                .map_err(BootstrapError::VectorSearch)?,
        );
        info!(
            event_name = "system.bootstrap.vector_search",
            correlation_id = "bootstrap",
            base_url = %client.base_url(),
            collection = %config.vector_search.collection,
            "live vector search configured"
        );
        (client.clone() as Arc<dyn SimilaritySearch>, Some(client))
    } else {
        info!(
            event_name = "system.bootstrap.vector_search",
            correlation_id = "bootstrap",
            "live vector search disabled, fallback catalog only"
        );
        (Arc::new(OfflineSearch) as Arc<dyn SimilaritySearch>, None)
    };

    Ok(Application {
        config,
        resolver: Arc::new(AlternativesResolver::new(search)),
        vector_client,
    })
}
