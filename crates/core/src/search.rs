use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::product::SearchResult;
use crate::domain::query::ProductQuery;

/// The single failure signal of a live similarity search. Timeouts, HTTP
/// errors and unreadable bodies all collapse into this.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("similarity search unavailable: {reason}")]
pub struct SearchUnavailable {
    pub reason: String,
}

impl SearchUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Best-effort, single-attempt similarity search over sustainable products.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    async fn search(&self, query: &ProductQuery) -> Result<Vec<SearchResult>, SearchUnavailable>;
}

#[async_trait]
impl<T> SimilaritySearch for Arc<T>
where
    T: SimilaritySearch + ?Sized,
{
    async fn search(&self, query: &ProductQuery) -> Result<Vec<SearchResult>, SearchUnavailable> {
        (**self).search(query).await
    }
}

/// Search backend used when live search is disabled; always unavailable.
#[derive(Clone, Debug, Default)]
pub struct OfflineSearch;

#[async_trait]
impl SimilaritySearch for OfflineSearch {
    async fn search(&self, _query: &ProductQuery) -> Result<Vec<SearchResult>, SearchUnavailable> {
        Err(SearchUnavailable::new("live search disabled"))
    }
}
