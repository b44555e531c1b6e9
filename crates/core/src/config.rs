use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for a live search call.
pub const MAX_SEARCH_TIMEOUT_MS: u64 = 5_000;
/// Upper bound for the vector service health check.
pub const MAX_HEALTH_TIMEOUT_MS: u64 = 3_000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub vector_search: VectorSearchConfig,
    pub alternatives: AlternativesConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct VectorSearchConfig {
    pub enabled: bool,
    pub base_url: String,
    pub collection: String,
    pub search_timeout_ms: u64,
    pub health_timeout_ms: u64,
}

impl VectorSearchConfig {
    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }
}

#[derive(Clone, Debug)]
pub struct AlternativesConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub graceful_shutdown_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub vector_search_enabled: Option<bool>,
    pub vector_search_base_url: Option<String>,
    pub default_limit: Option<usize>,
    pub server_port: Option<u16>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vector_search: VectorSearchConfig {
                enabled: true,
                base_url: "http://localhost:8080".to_string(),
                collection: "eco_products".to_string(),
                search_timeout_ms: MAX_SEARCH_TIMEOUT_MS,
                health_timeout_ms: MAX_HEALTH_TIMEOUT_MS,
            },
            alternatives: AlternativesConfig { default_limit: 3, max_limit: 10 },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 3001,
                graceful_shutdown_secs: 15,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("greenlane.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(vector_search) = patch.vector_search {
            if let Some(enabled) = vector_search.enabled {
                self.vector_search.enabled = enabled;
            }
            if let Some(base_url) = vector_search.base_url {
                self.vector_search.base_url = base_url;
            }
            if let Some(collection) = vector_search.collection {
                self.vector_search.collection = collection;
            }
            if let Some(search_timeout_ms) = vector_search.search_timeout_ms {
                self.vector_search.search_timeout_ms = search_timeout_ms;
            }
            if let Some(health_timeout_ms) = vector_search.health_timeout_ms {
                self.vector_search.health_timeout_ms = health_timeout_ms;
            }
        }

        if let Some(alternatives) = patch.alternatives {
            if let Some(default_limit) = alternatives.default_limit {
                self.alternatives.default_limit = default_limit;
            }
            if let Some(max_limit) = alternatives.max_limit {
                self.alternatives.max_limit = max_limit;
            }
        }

        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
            if let Some(graceful_shutdown_secs) = server.graceful_shutdown_secs {
                self.server.graceful_shutdown_secs = graceful_shutdown_secs;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("GREENLANE_VECTOR_SEARCH_ENABLED") {
            self.vector_search.enabled = parse_bool("GREENLANE_VECTOR_SEARCH_ENABLED", &value)?;
        }
        let base_url =
            read_env("GREENLANE_VECTOR_SEARCH_BASE_URL").or_else(|| read_env("VECTORAI_URL"));
        if let Some(value) = base_url {
            self.vector_search.base_url = value;
        }
        if let Some(value) = read_env("GREENLANE_VECTOR_SEARCH_COLLECTION") {
            self.vector_search.collection = value;
        }
        if let Some(value) = read_env("GREENLANE_VECTOR_SEARCH_SEARCH_TIMEOUT_MS") {
            self.vector_search.search_timeout_ms =
                parse_u64("GREENLANE_VECTOR_SEARCH_SEARCH_TIMEOUT_MS", &value)?;
        }
        if let Some(value) = read_env("GREENLANE_VECTOR_SEARCH_HEALTH_TIMEOUT_MS") {
            self.vector_search.health_timeout_ms =
                parse_u64("GREENLANE_VECTOR_SEARCH_HEALTH_TIMEOUT_MS", &value)?;
        }

        if let Some(value) = read_env("GREENLANE_ALTERNATIVES_DEFAULT_LIMIT") {
            self.alternatives.default_limit =
                parse_usize("GREENLANE_ALTERNATIVES_DEFAULT_LIMIT", &value)?;
        }
        if let Some(value) = read_env("GREENLANE_ALTERNATIVES_MAX_LIMIT") {
            self.alternatives.max_limit = parse_usize("GREENLANE_ALTERNATIVES_MAX_LIMIT", &value)?;
        }

        if let Some(value) = read_env("GREENLANE_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("GREENLANE_SERVER_PORT") {
            self.server.port = parse_u16("GREENLANE_SERVER_PORT", &value)?;
        }
        if let Some(value) = read_env("GREENLANE_SERVER_GRACEFUL_SHUTDOWN_SECS") {
            self.server.graceful_shutdown_secs =
                parse_u64("GREENLANE_SERVER_GRACEFUL_SHUTDOWN_SECS", &value)?;
        }

        let log_level =
            read_env("GREENLANE_LOGGING_LEVEL").or_else(|| read_env("GREENLANE_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("GREENLANE_LOGGING_FORMAT").or_else(|| read_env("GREENLANE_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(enabled) = overrides.vector_search_enabled {
            self.vector_search.enabled = enabled;
        }
        if let Some(base_url) = overrides.vector_search_base_url {
            self.vector_search.base_url = base_url;
        }
        if let Some(default_limit) = overrides.default_limit {
            self.alternatives.default_limit = default_limit;
        }
        if let Some(port) = overrides.server_port {
            self.server.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_vector_search(&self.vector_search)?;
        validate_alternatives(&self.alternatives)?;
        validate_server(&self.server)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// Config file used by [`AppConfig::load`] when no explicit path is given.
pub fn default_config_path() -> Option<PathBuf> {
    resolve_config_path(None)
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("greenlane.toml"), PathBuf::from("config/greenlane.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_vector_search(vector_search: &VectorSearchConfig) -> Result<(), ConfigError> {
    let base_url = vector_search.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::Validation(
            "vector_search.base_url must start with http:// or https://".to_string(),
        ));
    }

    if vector_search.collection.trim().is_empty() {
        return Err(ConfigError::Validation(
            "vector_search.collection must not be empty".to_string(),
        ));
    }

    if vector_search.search_timeout_ms == 0
        || vector_search.search_timeout_ms > MAX_SEARCH_TIMEOUT_MS
    {
        return Err(ConfigError::Validation(format!(
            "vector_search.search_timeout_ms must be in range 1..={MAX_SEARCH_TIMEOUT_MS}"
        )));
    }

    if vector_search.health_timeout_ms == 0
        || vector_search.health_timeout_ms > MAX_HEALTH_TIMEOUT_MS
    {
        return Err(ConfigError::Validation(format!(
            "vector_search.health_timeout_ms must be in range 1..={MAX_HEALTH_TIMEOUT_MS}"
        )));
    }

    Ok(())
}

fn validate_alternatives(alternatives: &AlternativesConfig) -> Result<(), ConfigError> {
    if alternatives.default_limit == 0 {
        return Err(ConfigError::Validation(
            "alternatives.default_limit must be greater than zero".to_string(),
        ));
    }

    if alternatives.default_limit > alternatives.max_limit {
        return Err(ConfigError::Validation(
            "alternatives.default_limit must not exceed alternatives.max_limit".to_string(),
        ));
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    if server.graceful_shutdown_secs == 0 {
        return Err(ConfigError::Validation(
            "server.graceful_shutdown_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    vector_search: Option<VectorSearchPatch>,
    alternatives: Option<AlternativesPatch>,
    server: Option<ServerPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct VectorSearchPatch {
    enabled: Option<bool>,
    base_url: Option<String>,
    collection: Option<String>,
    search_timeout_ms: Option<u64>,
    health_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct AlternativesPatch {
    default_limit: Option<usize>,
    max_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
