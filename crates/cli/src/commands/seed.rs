use std::path::Path;

use crate::commands::{load_options, runtime, CommandResult};
use greenlane_core::config::AppConfig;
use greenlane_core::fallback::catalog_entries;
use greenlane_vectorai::VectorAiClient;

pub fn run(config_path: Option<&Path>) -> CommandResult {
    let config = match AppConfig::load(load_options(config_path)) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    if !config.vector_search.enabled {
        return CommandResult::failure(
            "seed",
            "vector_search_disabled",
            "vector search is disabled; enable [vector_search] to seed the catalog",
            2,
        );
    }

    let client = match VectorAiClient::from_config(&config.vector_search) {
        Ok(client) => client,
        Err(error) => {
            return CommandResult::failure("seed", "vector_search_setup", error.to_string(), 3);
        }
    };

    let runtime = match runtime() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let entries = catalog_entries();
    let failed: Vec<String> = runtime.block_on(async {
        let mut failed = Vec::new();
        for entry in &entries {
            if !client.add_candidate(entry).await {
                failed.push(entry.id.0.clone());
            }
        }
        failed
    });

    let ingested = entries.len() - failed.len();
    if failed.is_empty() {
        CommandResult::success(
            "seed",
            format!(
                "ingested {ingested} catalog entries into `{}`",
                config.vector_search.collection
            ),
        )
    } else {
        CommandResult::failure("seed", "ingestion", failure_message(ingested, &failed), 4)
    }
}

fn failure_message(ingested: usize, failed: &[String]) -> String {
    format!(
        "ingested {ingested} of {} catalog entries; failed: {}",
        ingested + failed.len(),
        failed.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::failure_message;

    #[test]
    fn failure_message_lists_failed_entries() {
        let failed = vec!["bamboo-towels".to_string(), "ethique-shampoo".to_string()];

        assert_eq!(
            failure_message(14, &failed),
            "ingested 14 of 16 catalog entries; failed: bamboo-towels, ethique-shampoo"
        );
    }
}
