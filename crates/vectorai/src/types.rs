use greenlane_core::EcoCandidate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: String,
    pub collection: &'a str,
    pub limit: usize,
    pub filter: SearchFilter<'a>,
}

#[derive(Debug, Serialize)]
pub struct SearchFilter<'a> {
    pub category: &'a str,
}

/// Body of `POST /api/search`. A missing or null `results` reads as no results.
/// Records stay raw here and are decoded one at a time.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct IngestRequest<'a> {
    pub collection: &'a str,
    pub document: &'a EcoCandidate,
    pub text: String,
}
