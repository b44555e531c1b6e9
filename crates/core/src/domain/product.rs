use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

/// Vector stores commonly key records by integer; such ids are kept in their
/// decimal text form.
impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => Self(value),
            RawId::Unsigned(value) => Self(value.to_string()),
            RawId::Signed(value) => Self(value.to_string()),
        })
    }
}

/// A sustainable product offered as an alternative, either returned by the
/// live vector search or drawn from the curated fallback catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoCandidate {
    pub id: CandidateId,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Sustainability rating in `0..=100`.
    pub eco_score: u8,
    pub certifications: Vec<String>,
    pub description: String,
    pub price: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Fields the vector service sent beyond the ones above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EcoCandidate {
    /// Text the vector service embeds for this candidate.
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name,
            self.brand,
            self.category,
            self.description,
            self.certifications.join(" ")
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "product")]
    pub candidate: EcoCandidate,
    pub similarity: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{CandidateId, EcoCandidate, SearchResult};

    fn candidate() -> EcoCandidate {
        EcoCandidate {
            id: CandidateId("ethique-shampoo".to_string()),
            name: "Solid Shampoo Bar".to_string(),
            brand: "Ethique".to_string(),
            category: "beauty".to_string(),
            eco_score: 94,
            certifications: vec!["B-Corp".to_string(), "Vegan".to_string()],
            description: "Zero-waste solid shampoo bars".to_string(),
            price: "$16".to_string(),
            url: "https://ethique.com".to_string(),
            image_url: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn search_result_uses_vector_service_field_names() {
        let value = serde_json::to_value(SearchResult {
            candidate: candidate(),
            similarity: 0.5,
            extra: Default::default(),
        })
            .expect("serialize");

        assert_eq!(value["product"]["ecoScore"], json!(94));
        assert_eq!(value["product"]["id"], json!("ethique-shampoo"));
        assert!(value["product"].get("imageUrl").is_none());
        assert_eq!(value["similarity"], json!(0.5));
    }

    #[test]
    fn live_records_keep_unknown_fields() {
        let record = json!({
            "product": {
                "id": "live-1",
                "name": "Hemp Tote",
                "brand": "Baggu",
                "category": "home",
                "ecoScore": 81,
                "certifications": [],
                "description": "Reusable tote",
                "price": "$12",
                "url": "https://example.com/tote",
                "createdAt": "2024-05-01T00:00:00Z"
            },
            "similarity": 0.8,
            "score": 12.5
        });

        let result: SearchResult = serde_json::from_value(record.clone()).expect("decode");

        assert_eq!(result.candidate.extra["createdAt"], json!("2024-05-01T00:00:00Z"));
        assert_eq!(result.extra["score"], json!(12.5));
        assert_eq!(serde_json::to_value(&result).expect("serialize"), record);
    }

    #[test]
    fn integer_ids_are_read_as_text() {
        let id: CandidateId = serde_json::from_value(json!(42)).expect("decode");

        assert_eq!(id, CandidateId("42".to_string()));
    }

    #[test]
    fn embedding_text_joins_descriptive_fields() {
        assert_eq!(
            candidate().embedding_text(),
            "Solid Shampoo Bar Ethique beauty Zero-waste solid shampoo bars B-Corp Vegan"
        );
    }
}
