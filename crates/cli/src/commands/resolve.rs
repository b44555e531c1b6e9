use std::path::Path;
use std::sync::Arc;

use crate::commands::{load_options, runtime, CommandResult};
use greenlane_core::config::AppConfig;
use greenlane_core::{classify, AlternativesResolver, OfflineSearch, ProductQuery, SimilaritySearch};
use greenlane_vectorai::VectorAiClient;

#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub title: String,
    pub category: Option<String>,
    pub limit: Option<usize>,
    pub offline: bool,
}

pub fn run(config_path: Option<&Path>, args: ResolveArgs) -> CommandResult {
    let config = match AppConfig::load(load_options(config_path)) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "resolve",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let category = match args.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category.to_ascii_lowercase(),
        _ => classify(&args.title).as_str().to_string(),
    };
    let query = ProductQuery::new(args.title.trim(), category)
        .with_limit(args.limit.unwrap_or(config.alternatives.default_limit));
    if let Err(error) = query.validate(config.alternatives.max_limit) {
        return CommandResult::failure("resolve", "invalid_input", error.to_string(), 2);
    }

    let search: Arc<dyn SimilaritySearch> = if args.offline || !config.vector_search.enabled {
        Arc::new(OfflineSearch)
    } else {
        match VectorAiClient::from_config(&config.vector_search) {
            Ok(client) => Arc::new(client),
            Err(error) => {
                return CommandResult::failure("resolve", "vector_search_setup", error.to_string(), 3);
            }
        }
    };

    let runtime = match runtime() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "resolve",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let resolver = AlternativesResolver::new(search);
    let response = runtime.block_on(resolver.resolve(&query));

    match serde_json::to_string_pretty(&response) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure("resolve", "serialization", error.to_string(), 1),
    }
}
