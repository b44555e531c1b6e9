use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::load_options;
use greenlane_core::config::{default_config_path, AppConfig, LogFormat};
use toml::Value;

pub fn run(config_path: Option<&Path>) -> String {
    let config = match AppConfig::load(load_options(config_path)) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let file_path: Option<PathBuf> =
        config_path.map(Path::to_path_buf).or_else(default_config_path);
    let file_doc = load_config_file_doc(file_path.as_deref());

    let vector_search = &config.vector_search;
    let fields: [(&str, String, &[&str]); 12] = [
        (
            "vector_search.enabled",
            vector_search.enabled.to_string(),
            &["GREENLANE_VECTOR_SEARCH_ENABLED"],
        ),
        (
            "vector_search.base_url",
            vector_search.base_url.clone(),
            &["GREENLANE_VECTOR_SEARCH_BASE_URL", "VECTORAI_URL"],
        ),
        (
            "vector_search.collection",
            vector_search.collection.clone(),
            &["GREENLANE_VECTOR_SEARCH_COLLECTION"],
        ),
        (
            "vector_search.search_timeout_ms",
            vector_search.search_timeout_ms.to_string(),
            &["GREENLANE_VECTOR_SEARCH_SEARCH_TIMEOUT_MS"],
        ),
        (
            "vector_search.health_timeout_ms",
            vector_search.health_timeout_ms.to_string(),
            &["GREENLANE_VECTOR_SEARCH_HEALTH_TIMEOUT_MS"],
        ),
        (
            "alternatives.default_limit",
            config.alternatives.default_limit.to_string(),
            &["GREENLANE_ALTERNATIVES_DEFAULT_LIMIT"],
        ),
        (
            "alternatives.max_limit",
            config.alternatives.max_limit.to_string(),
            &["GREENLANE_ALTERNATIVES_MAX_LIMIT"],
        ),
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["GREENLANE_SERVER_BIND_ADDRESS"],
        ),
        ("server.port", config.server.port.to_string(), &["GREENLANE_SERVER_PORT"]),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["GREENLANE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            &["GREENLANE_LOGGING_LEVEL", "GREENLANE_LOG_LEVEL"],
        ),
        (
            "logging.format",
            format_label(config.logging.format).to_string(),
            &["GREENLANE_LOGGING_FORMAT", "GREENLANE_LOG_FORMAT"],
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key_path, value, env_keys) in fields {
        let source = field_source(key_path, env_keys, file_doc.as_ref(), file_path.as_deref());
        lines.push(render_line(key_path, &value, source));
    }

    lines.join("\n")
}

fn format_label(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
