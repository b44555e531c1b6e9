mod bootstrap;
mod health;
mod routes;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use greenlane_core::config::{AppConfig, LoadOptions};
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use crate::bootstrap::Application;
use crate::routes::ApiState;

/// Subscriber filter for `logging.level`. A level that does not parse is a
/// startup error rather than a silent fallback.
fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level.trim().to_ascii_lowercase())
        .with_context(|| format!("invalid logging.level `{level}`"))
}

fn init_logging(config: &AppConfig) -> Result<()> {
    use greenlane_core::config::LogFormat::*;

    let filter = log_filter(&config.logging.level)?;

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_env_filter(filter).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_env_filter(filter).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_env_filter(filter).json().init();
        }
    }
    Ok(())
}

fn app_router(app: &Application) -> Router {
    let api = routes::router(ApiState {
        resolver: app.resolver.clone(),
        vector_client: app.vector_client.clone(),
        default_limit: app.config.alternatives.default_limit,
        max_limit: app.config.alternatives.max_limit,
    });

    api.merge(health::router(app.vector_client.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Logging needs the loaded config, so load it once and hand it to bootstrap.
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config)?;

    let app = bootstrap::bootstrap_with_config(config)?;
    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    let router = app_router(&app);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        address = %address,
        vector_search = app.vector_client.is_some(),
        "greenlane-server listening"
    );
    wait_for_shutdown().await?;
    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        grace_secs = grace.as_secs(),
        "greenlane-server stopping"
    );

    let _ = shutdown_tx.send(());
    match tokio::time::timeout(grace, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            event_name = "system.server.shutdown_timeout",
            correlation_id = "shutdown",
            "in-flight requests did not drain before the grace period elapsed"
        ),
    }

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use greenlane_core::config::AppConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::bootstrap::bootstrap_with_config;
    use crate::{app_router, log_filter};

    #[test]
    fn log_filter_honours_configured_level() {
        let filter = log_filter(" DEBUG ").expect("debug is a valid level");
        assert_eq!(filter.to_string(), "debug");

        let filter = log_filter("warn").expect("warn is a valid level");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn log_filter_rejects_unparseable_level() {
        let error = log_filter("greenlane=loud").err().expect("should reject");
        assert!(error.to_string().contains("logging.level"));
    }

    #[tokio::test]
    async fn app_router_serves_health_and_api_routes() {
        let mut config = AppConfig::default();
        config.vector_search.enabled = false;
        let app = bootstrap_with_config(config).expect("bootstrap");
        let router = app_router(&app);

        let health = router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("health response");
        assert_eq!(health.status(), StatusCode::OK);
        let bytes = to_bytes(health.into_body(), usize::MAX).await.expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["vectorSearch"]["status"], "disabled");

        let detect = router
            .oneshot(
                Request::get("/api/categories/detect?title=yoga%20mat")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("detect response");
        assert_eq!(detect.status(), StatusCode::OK);
    }
}
