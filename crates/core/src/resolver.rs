//! Alternatives resolution: eligibility gate, then live search, then the
//! curated fallback catalog, combined with sustainability tips.

use tracing::{debug, info, warn};

use crate::domain::alternatives::AlternativesResponse;
use crate::domain::query::ProductQuery;
use crate::domain::tip::SustainabilityTip;
use crate::eligibility::is_limited;
use crate::fallback::fallback;
use crate::search::SimilaritySearch;
use crate::tips::tips_for;

/// Tips kept next to live-search alternatives.
const LIVE_TIP_COUNT: usize = 1;
/// Tips kept next to fallback-catalog alternatives.
const FALLBACK_TIP_COUNT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionPath {
    Limited,
    Live,
    LiveEmpty,
    Fallback,
}

impl ResolutionPath {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limited => "limited",
            Self::Live => "live",
            Self::LiveEmpty => "live_empty",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AlternativesResolver<S> {
    search: S,
}

impl<S> AlternativesResolver<S>
where
    S: SimilaritySearch,
{
    pub fn new(search: S) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub async fn resolve(&self, query: &ProductQuery) -> AlternativesResponse {
        self.resolve_with_path(query).await.0
    }

    /// Resolves alternatives and reports which path produced them. Never
    /// fails: an unavailable live search degrades to the fallback catalog.
    pub async fn resolve_with_path(
        &self,
        query: &ProductQuery,
    ) -> (AlternativesResponse, ResolutionPath) {
        let tips = tips_for(&query.category, &query.title);

        if is_limited(&query.category, &query.title) {
            debug!(
                event_name = "alternatives.resolve.gate",
                category = %query.category,
                "category has no meaningful eco alternatives"
            );
            return finish(query, AlternativesResponse::tips_only(tips), ResolutionPath::Limited);
        }

        match self.search.search(query).await {
            Err(unavailable) => {
                warn!(
                    event_name = "alternatives.resolve.search_unavailable",
                    category = %query.category,
                    reason = %unavailable.reason,
                    "live search unavailable, using fallback catalog"
                );
                let results = fallback(&query.category, query.limit);
                let response = AlternativesResponse::new(results, leading(tips, FALLBACK_TIP_COUNT));
                finish(query, response, ResolutionPath::Fallback)
            }
            Ok(mut results) => {
                results.truncate(query.limit);
                if results.is_empty() {
                    finish(query, AlternativesResponse::tips_only(tips), ResolutionPath::LiveEmpty)
                } else {
                    let response = AlternativesResponse::new(results, leading(tips, LIVE_TIP_COUNT));
                    finish(query, response, ResolutionPath::Live)
                }
            }
        }
    }
}

fn leading(mut tips: Vec<SustainabilityTip>, count: usize) -> Vec<SustainabilityTip> {
    tips.truncate(count);
    tips
}

fn finish(
    query: &ProductQuery,
    response: AlternativesResponse,
    path: ResolutionPath,
) -> (AlternativesResponse, ResolutionPath) {
    info!(
        event_name = "alternatives.resolve.completed",
        path = path.as_str(),
        category = %query.category,
        limit = query.limit,
        alternatives = response.alternatives.len(),
        tips = response.tips.len(),
        "alternatives resolved"
    );
    (response, path)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{AlternativesResolver, ResolutionPath};
    use crate::domain::product::{CandidateId, EcoCandidate, SearchResult};
    use crate::domain::query::ProductQuery;
    use crate::search::{SearchUnavailable, SimilaritySearch};

    struct ScriptedSearch {
        outcome: Result<Vec<SearchResult>, SearchUnavailable>,
        calls: AtomicUsize,
        last_query: Mutex<Option<ProductQuery>>,
    }

    impl ScriptedSearch {
        fn returning(results: Vec<SearchResult>) -> Self {
            Self { outcome: Ok(results), calls: AtomicUsize::new(0), last_query: Mutex::new(None) }
        }

        fn unavailable() -> Self {
            Self {
                outcome: Err(SearchUnavailable::new("connection refused")),
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SimilaritySearch for ScriptedSearch {
        async fn search(
            &self,
            query: &ProductQuery,
        ) -> Result<Vec<SearchResult>, SearchUnavailable> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().expect("query lock") = Some(query.clone());
            self.outcome.clone()
        }
    }

    fn live_result(id: &str, similarity: f64) -> SearchResult {
        SearchResult {
            candidate: EcoCandidate {
                id: CandidateId(id.to_string()),
                name: format!("{id} name"),
                brand: "Live Brand".to_string(),
                category: "home".to_string(),
                eco_score: 80,
                certifications: vec!["B-Corp".to_string()],
                description: "from the vector index".to_string(),
                price: "$10".to_string(),
                url: format!("https://example.com/{id}"),
                image_url: Some(format!("https://example.com/{id}.png")),
                extra: Default::default(),
            },
            similarity,
            extra: Default::default(),
        }
    }

    #[tokio::test]
    async fn limited_products_never_reach_live_search() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(vec![live_result(
            "unused", 0.9,
        )]));

        let (response, path) = resolver
            .resolve_with_path(&ProductQuery::new("NVIDIA RTX 4090 Graphics Card", "electronics"))
            .await;

        assert_eq!(path, ResolutionPath::Limited);
        assert!(response.alternatives.is_empty());
        assert!(!response.has_eco_alternatives);
        assert_eq!(response.tips.len(), 4);
        assert_eq!(resolver.search().calls(), 0);
    }

    #[tokio::test]
    async fn capitalized_limited_category_still_skips_live_search() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(vec![live_result(
            "unused", 0.9,
        )]));

        let (response, path) =
            resolver.resolve_with_path(&ProductQuery::new("Reusable tote bag", "Electronics")).await;

        assert_eq!(path, ResolutionPath::Limited);
        assert!(response.alternatives.is_empty());
        assert_eq!(response.tips[0].title, "Check Energy Efficiency");
        assert_eq!(resolver.search().calls(), 0);
    }

    #[tokio::test]
    async fn live_results_pass_through_with_one_tip() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(vec![
            live_result("a", 0.81),
            live_result("b", 0.77),
        ]));

        let (response, path) =
            resolver.resolve_with_path(&ProductQuery::new("Bamboo Towel", "home")).await;

        assert_eq!(path, ResolutionPath::Live);
        assert_eq!(response.alternatives, vec![live_result("a", 0.81), live_result("b", 0.77)]);
        assert_eq!(response.tips.len(), 1);
        assert!(response.has_eco_alternatives);
    }

    #[tokio::test]
    async fn live_search_receives_the_query() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(Vec::new()));
        let query = ProductQuery::new("Bamboo Towel", "home").with_limit(2);

        resolver.resolve(&query).await;

        let seen = resolver.search().last_query.lock().expect("query lock").clone();
        assert_eq!(seen, Some(query));
    }

    #[tokio::test]
    async fn live_results_are_capped_at_limit() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(vec![
            live_result("a", 0.9),
            live_result("b", 0.8),
            live_result("c", 0.7),
        ]));

        let response =
            resolver.resolve(&ProductQuery::new("Bamboo Towel", "home").with_limit(2)).await;

        assert_eq!(response.alternatives.len(), 2);
    }

    #[tokio::test]
    async fn empty_live_results_return_full_tip_set() {
        let resolver = AlternativesResolver::new(ScriptedSearch::returning(Vec::new()));

        let (response, path) =
            resolver.resolve_with_path(&ProductQuery::new("Linen Shirt", "clothing")).await;

        assert_eq!(path, ResolutionPath::LiveEmpty);
        assert!(response.alternatives.is_empty());
        assert!(!response.has_eco_alternatives);
        assert_eq!(response.tips.len(), 2);
        assert_eq!(resolver.search().calls(), 1);
    }

    #[tokio::test]
    async fn unavailable_search_uses_fallback_with_two_tips() {
        let resolver = AlternativesResolver::new(ScriptedSearch::unavailable());

        let (response, path) = resolver
            .resolve_with_path(&ProductQuery::new("Linen Shirt", "clothing").with_limit(2))
            .await;

        assert_eq!(path, ResolutionPath::Fallback);
        let ids: Vec<&str> =
            response.alternatives.iter().map(|result| result.candidate.id.0.as_str()).collect();
        assert_eq!(ids, vec!["patagonia-recycled-tee", "pact-organic-basics"]);
        let scores: Vec<f64> = response.alternatives.iter().map(|result| result.similarity).collect();
        assert_eq!(scores, vec![0.95, 0.90]);
        assert!(response.tips.len() <= 2);
        assert!(response.has_eco_alternatives);
    }

    #[tokio::test]
    async fn zero_limit_yields_no_alternatives_on_either_path() {
        let live = AlternativesResolver::new(ScriptedSearch::returning(vec![live_result("a", 0.9)]));
        let offline = AlternativesResolver::new(ScriptedSearch::unavailable());
        let query = ProductQuery::new("Linen Shirt", "clothing").with_limit(0);

        let from_live = live.resolve(&query).await;
        let from_fallback = offline.resolve(&query).await;

        assert!(from_live.alternatives.is_empty());
        assert!(!from_live.has_eco_alternatives);
        assert!(from_fallback.alternatives.is_empty());
        assert!(!from_fallback.has_eco_alternatives);
    }
}
