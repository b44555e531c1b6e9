use std::path::Path;

use crate::commands::{load_options, runtime, CommandResult};
use greenlane_core::config::AppConfig;
use greenlane_vectorai::VectorAiClient;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

/// Exit code is 0 when no check failed. A skipped vector search check
/// (search disabled) does not fail the report.
pub fn run(config_path: Option<&Path>, json_output: bool) -> CommandResult {
    let report = build_report(config_path);
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report(config_path: Option<&Path>) -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(load_options(config_path)) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_vector_search(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "vector_search_health",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let any_failed = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let overall_status = if any_failed { CheckStatus::Fail } else { CheckStatus::Pass };
    let summary = if any_failed {
        "doctor: one or more readiness checks failed".to_string()
    } else {
        "doctor: all readiness checks passed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_vector_search(config: &AppConfig) -> DoctorCheck {
    if !config.vector_search.enabled {
        return DoctorCheck {
            name: "vector_search_health",
            status: CheckStatus::Skipped,
            details: "vector search disabled; alternatives come from the curated catalog"
                .to_string(),
        };
    }

    let client = match VectorAiClient::from_config(&config.vector_search) {
        Ok(client) => client,
        Err(error) => {
            return DoctorCheck {
                name: "vector_search_health",
                status: CheckStatus::Fail,
                details: format!("failed to build vector search client: {error}"),
            };
        }
    };

    let runtime = match runtime() {
        Ok(runtime) => runtime,
        Err(error) => {
            return DoctorCheck {
                name: "vector_search_health",
                status: CheckStatus::Fail,
                details: format!("failed to initialize async runtime: {error}"),
            };
        }
    };

    if runtime.block_on(client.health_check()) {
        DoctorCheck {
            name: "vector_search_health",
            status: CheckStatus::Pass,
            details: format!("`{}` answered the health check", client.base_url()),
        }
    } else {
        DoctorCheck {
            name: "vector_search_health",
            status: CheckStatus::Fail,
            details: format!(
                "`{}` did not answer within {} ms",
                client.base_url(),
                config.vector_search.health_timeout_ms
            ),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
