use serde::{Deserialize, Serialize};

use super::product::SearchResult;
use super::tip::SustainabilityTip;

/// Outcome of one alternatives resolution. Recomputed on every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesResponse {
    pub alternatives: Vec<SearchResult>,
    pub tips: Vec<SustainabilityTip>,
    pub has_eco_alternatives: bool,
}

impl AlternativesResponse {
    pub fn new(alternatives: Vec<SearchResult>, tips: Vec<SustainabilityTip>) -> Self {
        let has_eco_alternatives = !alternatives.is_empty();
        Self { alternatives, tips, has_eco_alternatives }
    }

    pub fn tips_only(tips: Vec<SustainabilityTip>) -> Self {
        Self::new(Vec::new(), tips)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::AlternativesResponse;

    #[test]
    fn tips_only_response_has_no_alternatives_flag() {
        let response = AlternativesResponse::tips_only(Vec::new());
        assert!(!response.has_eco_alternatives);

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value, json!({ "alternatives": [], "tips": [], "hasEcoAlternatives": false }));
    }
}
