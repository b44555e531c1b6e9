use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use greenlane_vectorai::VectorAiClient;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    vector_client: Option<Arc<VectorAiClient>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub vector_search: HealthCheck,
    pub checked_at: String,
}

pub fn router(vector_client: Option<Arc<VectorAiClient>>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { vector_client })
}

/// Always answers 200. An unreachable vector search reports `degraded`.
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let vector_search = vector_search_check(state.vector_client.as_deref()).await;
    let degraded = vector_search.status == "degraded";

    let payload = HealthResponse {
        status: if degraded { "degraded" } else { "ready" },
        service: HealthCheck {
            status: "ready",
            detail: "greenlane-server runtime initialized".to_string(),
        },
        vector_search,
        checked_at: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(payload))
}

async fn vector_search_check(client: Option<&VectorAiClient>) -> HealthCheck {
    let Some(client) = client else {
        return HealthCheck {
            status: "disabled",
            detail: "live vector search disabled; serving fallback catalog".to_string(),
        };
    };

    if client.health_check().await {
        HealthCheck { status: "ready", detail: format!("{} is reachable", client.base_url()) }
    } else {
        HealthCheck {
            status: "degraded",
            detail: format!("{} is unreachable; serving fallback catalog", client.base_url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{extract::State, http::StatusCode, Json};
    use greenlane_vectorai::VectorAiClient;

    use crate::health::{health, HealthState};

    fn unreachable_client() -> VectorAiClient {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
        let address = listener.local_addr().expect("free port address");
        drop(listener);

        VectorAiClient::new(
            &format!("http://{address}"),
            "eco_products",
            Duration::from_millis(200),
            Duration::from_millis(200),
        )
        .expect("client should build")
    }

    #[tokio::test]
    async fn health_is_ready_when_vector_search_is_disabled() {
        let (status, Json(payload)) = health(State(HealthState { vector_client: None })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert_eq!(payload.vector_search.status, "disabled");
    }

    #[tokio::test]
    async fn health_is_degraded_but_ok_when_vector_search_is_unreachable() {
        let state = HealthState { vector_client: Some(Arc::new(unreachable_client())) };

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.vector_search.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
