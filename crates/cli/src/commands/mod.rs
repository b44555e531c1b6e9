pub mod classify;
pub mod config;
pub mod doctor;
pub mod resolve;
pub mod seed;

use std::path::Path;

use greenlane_core::config::LoadOptions;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Load options for an optional `--config` path. An explicit path must exist.
pub(crate) fn load_options(config_path: Option<&Path>) -> LoadOptions {
    LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        require_file: config_path.is_some(),
        ..LoadOptions::default()
    }
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread().enable_all().build()
}
