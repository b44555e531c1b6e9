//! JSON API over the alternatives resolver.
//!
//! - `POST /api/alternatives`        resolve alternatives and tips for a product
//! - `GET  /api/categories/detect`   classify a product title
//! - `POST /api/catalog`             ingest a candidate into vector search

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use greenlane_core::{
    classify, AlternativesResponse, ApplicationError, EcoCandidate, InterfaceError, ProductQuery,
};
use greenlane_vectorai::VectorAiClient;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::bootstrap::SharedResolver;

#[derive(Clone)]
pub struct ApiState {
    pub resolver: SharedResolver,
    pub vector_client: Option<Arc<VectorAiClient>>,
    pub default_limit: usize,
    pub max_limit: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesRequest {
    #[serde(default)]
    pub product_title: String,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AlternativesEnvelope {
    pub success: bool,
    pub data: AlternativesResponse,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct DetectParams {
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectEnvelope {
    pub success: bool,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogEnvelope {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    correlation_id: &'a str,
}

/// Interface error rendered as `{ success: false, error, correlationId }`.
#[derive(Debug)]
pub struct ApiError(pub InterfaceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            InterfaceError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message.as_str()),
            InterfaceError::ServiceUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.user_message())
            }
        };
        let body = ErrorBody { success: false, error, correlation_id: self.0.correlation_id() };
        (status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>, correlation_id: &str) -> ApiError {
    ApiError(InterfaceError::BadRequest {
        message: message.into(),
        correlation_id: correlation_id.to_string(),
    })
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/alternatives", post(alternatives))
        .route("/api/categories/detect", get(detect_category))
        .route("/api/catalog", post(ingest_candidate))
        .with_state(state)
}

pub async fn alternatives(
    State(state): State<ApiState>,
    payload: Result<Json<AlternativesRequest>, JsonRejection>,
) -> Result<Json<AlternativesEnvelope>, ApiError> {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!("api.alternatives", correlation_id = %correlation_id);

    resolve_alternatives(state, payload, &correlation_id).instrument(span).await
}

async fn resolve_alternatives(
    state: ApiState,
    payload: Result<Json<AlternativesRequest>, JsonRejection>,
    correlation_id: &str,
) -> Result<Json<AlternativesEnvelope>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| bad_request(rejection.body_text(), correlation_id))?;

    let category = match request.category.as_deref().map(str::trim) {
        Some(category) if !category.is_empty() => category.to_ascii_lowercase(),
        _ => classify(&request.product_title).as_str().to_string(),
    };
    let query = ProductQuery::new(request.product_title.trim(), category)
        .with_limit(request.limit.unwrap_or(state.default_limit));

    query
        .validate(state.max_limit)
        .map_err(|err| ApiError(ApplicationError::from(err).into_interface(correlation_id)))?;

    let data = state.resolver.resolve(&query).await;
    Ok(Json(AlternativesEnvelope { success: true, data, category: query.category }))
}

pub async fn detect_category(
    Query(params): Query<DetectParams>,
) -> Result<Json<DetectEnvelope>, ApiError> {
    let title = params.title.unwrap_or_default();
    if title.trim().is_empty() {
        let correlation_id = Uuid::new_v4().to_string();
        return Err(bad_request("title query parameter is required", &correlation_id));
    }

    Ok(Json(DetectEnvelope { success: true, category: classify(&title).as_str() }))
}

pub async fn ingest_candidate(
    State(state): State<ApiState>,
    payload: Result<Json<EcoCandidate>, JsonRejection>,
) -> Result<(StatusCode, Json<CatalogEnvelope>), ApiError> {
    let correlation_id = Uuid::new_v4().to_string();
    let Json(candidate) =
        payload.map_err(|rejection| bad_request(rejection.body_text(), &correlation_id))?;

    let Some(client) = state.vector_client.as_deref() else {
        warn!(
            event_name = "api.catalog.disabled",
            correlation_id = %correlation_id,
            candidate_id = %candidate.id.0,
            "catalog ingestion requested while vector search is disabled"
        );
        return Err(unavailable("vector search disabled", &correlation_id));
    };

    if client.add_candidate(&candidate).await {
        info!(
            event_name = "api.catalog.ingested",
            correlation_id = %correlation_id,
            candidate_id = %candidate.id.0,
            "candidate ingested"
        );
        Ok((StatusCode::ACCEPTED, Json(CatalogEnvelope { success: true })))
    } else {
        Err(unavailable("vector search rejected the candidate", &correlation_id))
    }
}

fn unavailable(reason: &str, correlation_id: &str) -> ApiError {
    ApiError(ApplicationError::Integration(reason.to_string()).into_interface(correlation_id))
}
