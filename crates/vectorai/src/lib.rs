pub mod error;
pub mod types;

pub use error::{Result, VectorAiError};

use std::time::Duration;

use async_trait::async_trait;
use greenlane_core::config::VectorSearchConfig;
use greenlane_core::{EcoCandidate, ProductQuery, SearchResult, SearchUnavailable, SimilaritySearch};
use tracing::{debug, error, warn};
use types::{IngestRequest, SearchFilter, SearchRequest, SearchResponse};

/// Client for the VectorAI service: `POST /api/search`, `POST /api/products`
/// and `GET /health`. Every call is a single bounded attempt.
#[derive(Clone, Debug)]
pub struct VectorAiClient {
    client: reqwest::Client,
    base_url: String,
    collection: String,
    search_timeout: Duration,
    health_timeout: Duration,
}

impl VectorAiClient {
    pub fn new(
        base_url: &str,
        collection: &str,
        search_timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(search_timeout)
            .build()
            .map_err(|err| VectorAiError::Setup(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            search_timeout,
            health_timeout,
        })
    }

    pub fn from_config(config: &VectorSearchConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            &config.collection,
            config.search_timeout(),
            config.health_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Similarity search filtered to the query's category. Results are
    /// returned as the service ranked them, unknown fields included. A record
    /// that cannot be read is skipped; if none can be read the call fails.
    pub async fn find_similar(&self, query: &ProductQuery) -> Result<Vec<SearchResult>> {
        let body = SearchRequest {
            query: query.search_text(),
            collection: &self.collection,
            limit: query.limit,
            filter: SearchFilter { category: &query.category },
        };

        debug!(
            event_name = "vectorai.search.request",
            category = %query.category,
            limit = query.limit,
            "searching for eco alternatives"
        );

        let resp = self
            .client
            .post(format!("{}/api/search", self.base_url))
            .timeout(self.search_timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(VectorAiError::Api { status: status.as_u16(), message });
        }

        let payload: SearchResponse = resp.json().await?;
        decode_records(payload.results.unwrap_or_default())
    }

    /// Ingest a candidate into the collection. Failures are logged and
    /// reported as `false`.
    pub async fn add_candidate(&self, candidate: &EcoCandidate) -> bool {
        match self.try_add_candidate(candidate).await {
            Ok(()) => true,
            Err(err) => {
                error!(
                    event_name = "vectorai.ingest.failed",
                    candidate_id = %candidate.id.0,
                    error = %err,
                    "failed to add product to vector search"
                );
                false
            }
        }
    }

    async fn try_add_candidate(&self, candidate: &EcoCandidate) -> Result<()> {
        let body = IngestRequest {
            collection: &self.collection,
            document: candidate,
            text: candidate.embedding_text(),
        };

        let resp = self
            .client
            .post(format!("{}/api/products", self.base_url))
            .timeout(self.search_timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(VectorAiError::Api { status: status.as_u16(), message });
        }

        Ok(())
    }

    /// Liveness check with the short health timeout. Any error reads as
    /// unhealthy.
    pub async fn health_check(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await;

        match result {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                debug!(event_name = "vectorai.health.failed", error = %err, "health check failed");
                false
            }
        }
    }
}

fn decode_records(records: Vec<serde_json::Value>) -> Result<Vec<SearchResult>> {
    let total = records.len();
    let mut results = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<SearchResult>(record) {
            Ok(result) => results.push(result),
            Err(err) => warn!(
                event_name = "vectorai.search.record_skipped",
                index,
                error = %err,
                "skipping unreadable search result"
            ),
        }
    }

    if total > 0 && results.is_empty() {
        return Err(VectorAiError::Parse(format!("none of {total} search results could be read")));
    }
    Ok(results)
}

#[async_trait]
impl SimilaritySearch for VectorAiClient {
    async fn search(
        &self,
        query: &ProductQuery,
    ) -> std::result::Result<Vec<SearchResult>, SearchUnavailable> {
        self.find_similar(query).await.map_err(|err| {
            warn!(
                event_name = "vectorai.search.unavailable",
                category = %query.category,
                error = %err,
                "vector search failed"
            );
            SearchUnavailable::from(err)
        })
    }
}
