//! Curated catalog of real sustainable products, used when the live vector
//! search cannot answer.

use crate::domain::product::{CandidateId, EcoCandidate, SearchResult};

#[derive(Debug, Clone, Copy)]
struct CandidateSeed {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    category: &'static str,
    eco_score: u8,
    certifications: &'static [&'static str],
    description: &'static str,
    price: &'static str,
    url: &'static str,
}

impl CandidateSeed {
    fn to_candidate(self) -> EcoCandidate {
        EcoCandidate {
            id: CandidateId(self.id.to_string()),
            name: self.name.to_string(),
            brand: self.brand.to_string(),
            category: self.category.to_string(),
            eco_score: self.eco_score,
            certifications: self.certifications.iter().map(|value| value.to_string()).collect(),
            description: self.description.to_string(),
            price: self.price.to_string(),
            url: self.url.to_string(),
            image_url: None,
            extra: Default::default(),
        }
    }
}

const CLOTHING: &[CandidateSeed] = &[
    CandidateSeed {
        id: "patagonia-recycled-tee",
        name: "Regenerative Organic Cotton Tee",
        brand: "Patagonia",
        category: "clothing",
        eco_score: 92,
        certifications: &["Fair Trade", "Organic", "B-Corp"],
        description: "Made from 100% regenerative organic cotton",
        price: "$45",
        url: "https://www.patagonia.com/product/mens-regenerative-organic-certified-cotton-crewneck-t-shirt/51736.html",
    },
    CandidateSeed {
        id: "pact-organic-basics",
        name: "Organic Cotton Essentials",
        brand: "PACT",
        category: "clothing",
        eco_score: 88,
        certifications: &["GOTS Certified", "Fair Trade"],
        description: "Super soft organic cotton basics",
        price: "$25",
        url: "https://wearpact.com",
    },
    CandidateSeed {
        id: "eileen-fisher-recycled",
        name: "Recycled Cashmere Sweater",
        brand: "Eileen Fisher",
        category: "clothing",
        eco_score: 85,
        certifications: &["B-Corp", "Recycled Materials"],
        description: "Made from recycled cashmere fibers",
        price: "$298",
        url: "https://www.eileenfisher.com",
    },
];

const ELECTRONICS: &[CandidateSeed] = &[
    CandidateSeed {
        id: "fairphone-5",
        name: "Fairphone 5",
        brand: "Fairphone",
        category: "electronics",
        eco_score: 90,
        certifications: &["Fair Trade", "B-Corp", "Modular Design"],
        description: "Modular, repairable smartphone with ethical materials",
        price: "$699",
        url: "https://www.fairphone.com/en/fairphone-5/",
    },
    CandidateSeed {
        id: "framework-laptop",
        name: "Framework Laptop 16",
        brand: "Framework",
        category: "electronics",
        eco_score: 88,
        certifications: &["Repairable", "Modular", "Upgradeable"],
        description: "Fully upgradeable and repairable laptop",
        price: "$1,399",
        url: "https://frame.work",
    },
];

const HOME: &[CandidateSeed] = &[
    CandidateSeed {
        id: "grove-cleaning",
        name: "Plastic-Free Cleaning Kit",
        brand: "Grove Collaborative",
        category: "home",
        eco_score: 91,
        certifications: &["B-Corp", "Plastic-Free", "Plant-Based"],
        description: "Complete home cleaning with zero plastic",
        price: "$35",
        url: "https://www.grove.co",
    },
    CandidateSeed {
        id: "blueland-starter",
        name: "Clean Essentials Kit",
        brand: "Blueland",
        category: "home",
        eco_score: 93,
        certifications: &["B-Corp", "Plastic-Free", "Refillable"],
        description: "Refillable cleaning tablets - no single-use plastic",
        price: "$39",
        url: "https://www.blueland.com",
    },
];

const BEAUTY: &[CandidateSeed] = &[
    CandidateSeed {
        id: "ethique-shampoo",
        name: "Solid Shampoo Bar",
        brand: "Ethique",
        category: "beauty",
        eco_score: 94,
        certifications: &["B-Corp", "Plastic-Free", "Vegan", "Palm Oil Free"],
        description: "Zero-waste solid shampoo bars",
        price: "$16",
        url: "https://ethique.com",
    },
    CandidateSeed {
        id: "plaine-products",
        name: "Refillable Shampoo System",
        brand: "Plaine Products",
        category: "beauty",
        eco_score: 90,
        certifications: &["B-Corp", "Refillable", "Aluminum Bottles"],
        description: "Send back bottles for refills",
        price: "$32",
        url: "https://www.plaineproducts.com",
    },
];

const FOOD: &[CandidateSeed] = &[
    CandidateSeed {
        id: "imperfect-foods",
        name: "Imperfect Foods Box",
        brand: "Imperfect Foods",
        category: "food",
        eco_score: 87,
        certifications: &["Reduces Food Waste", "B-Corp"],
        description: "Rescued groceries delivered to your door",
        price: "$30+",
        url: "https://www.imperfectfoods.com",
    },
    CandidateSeed {
        id: "package-free-shop",
        name: "Zero Waste Grocery Essentials",
        brand: "Package Free Shop",
        category: "food",
        eco_score: 92,
        certifications: &["Zero Waste", "Plastic-Free"],
        description: "Bulk food and zero-waste groceries",
        price: "Varies",
        url: "https://packagefreeshop.com",
    },
];

const SPORTS: &[CandidateSeed] = &[
    CandidateSeed {
        id: "allbirds-runners",
        name: "Tree Dasher 2 Running Shoes",
        brand: "Allbirds",
        category: "sports",
        eco_score: 92,
        certifications: &["B-Corp", "Carbon Neutral", "FSC-Certified"],
        description: "Made from eucalyptus tree fiber and natural materials",
        price: "$135",
        url: "https://www.allbirds.com/products/mens-tree-dashers",
    },
    CandidateSeed {
        id: "vivobarefoot-shoes",
        name: "Primus Lite III Running Shoes",
        brand: "Vivobarefoot",
        category: "sports",
        eco_score: 88,
        certifications: &["B-Corp", "Recycled Materials", "Repairable"],
        description: "Minimalist shoes with recycled materials and repair program",
        price: "$160",
        url: "https://www.vivobarefoot.com/us/primus-lite-iii-mens",
    },
    CandidateSeed {
        id: "cotopaxi-gear",
        name: "Sustainable Outdoor Gear",
        brand: "Cotopaxi",
        category: "sports",
        eco_score: 90,
        certifications: &["B-Corp", "Repurposed Materials", "Fair Trade"],
        description: "Outdoor gear made from repurposed and remnant fabrics",
        price: "Varies",
        url: "https://www.cotopaxi.com",
    },
];

const GENERAL: &[CandidateSeed] = &[
    CandidateSeed {
        id: "earthhero-general",
        name: "Sustainable Alternatives",
        brand: "EarthHero",
        category: "general",
        eco_score: 85,
        certifications: &["B-Corp", "Curated Sustainable"],
        description: "Curated sustainable products marketplace",
        price: "Varies",
        url: "https://earthhero.com",
    },
    CandidateSeed {
        id: "thrive-market",
        name: "Eco-Friendly Products",
        brand: "Thrive Market",
        category: "general",
        eco_score: 82,
        certifications: &["B-Corp", "Carbon Neutral"],
        description: "Healthy and sustainable products at wholesale prices",
        price: "Varies",
        url: "https://thrivemarket.com",
    },
];

const CATALOG: &[(&str, &[CandidateSeed])] = &[
    ("clothing", CLOTHING),
    ("electronics", ELECTRONICS),
    ("home", HOME),
    ("beauty", BEAUTY),
    ("food", FOOD),
    ("sports", SPORTS),
];

const TOP_SIMILARITY_PCT: usize = 95;
const SIMILARITY_STEP_PCT: usize = 5;

fn seeds_for(category: &str) -> &'static [CandidateSeed] {
    let normalized = category.to_lowercase();
    CATALOG
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, seeds)| *seeds)
        .unwrap_or(GENERAL)
}

/// Similarity assigned to the fallback entry at `rank` (0-based):
/// 0.95, 0.90, 0.85, ...
pub fn fallback_similarity(rank: usize) -> f64 {
    let pct = TOP_SIMILARITY_PCT.saturating_sub(rank * SIMILARITY_STEP_PCT);
    pct as f64 / 100.0
}

/// Up to `limit` curated candidates for `category`, ranked by descending
/// synthetic similarity. Unknown categories use the general catalog.
pub fn fallback(category: &str, limit: usize) -> Vec<SearchResult> {
    seeds_for(category)
        .iter()
        .take(limit)
        .enumerate()
        .map(|(rank, seed)| SearchResult {
            candidate: seed.to_candidate(),
            similarity: fallback_similarity(rank),
            extra: Default::default(),
        })
        .collect()
}

/// Every curated entry, category lists first and the general list last.
pub fn catalog_entries() -> Vec<EcoCandidate> {
    CATALOG
        .iter()
        .flat_map(|(_, seeds)| seeds.iter())
        .chain(GENERAL.iter())
        .map(|seed| seed.to_candidate())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{catalog_entries, fallback, fallback_similarity};

    fn ids(category: &str, limit: usize) -> Vec<String> {
        fallback(category, limit).into_iter().map(|result| result.candidate.id.0).collect()
    }

    #[test]
    fn clothing_fallback_takes_first_entries_in_order() {
        let results = fallback("clothing", 2);

        assert_eq!(ids("clothing", 2), vec!["patagonia-recycled-tee", "pact-organic-basics"]);
        let scores: Vec<f64> = results.iter().map(|result| result.similarity).collect();
        assert_eq!(scores, vec![0.95, 0.90]);
    }

    #[test]
    fn category_lookup_is_case_insensitive() {
        assert_eq!(ids("BEAUTY", 1), vec!["ethique-shampoo"]);
    }

    #[test]
    fn unknown_categories_use_general_catalog() {
        assert_eq!(ids("widgets", 3), vec!["earthhero-general", "thrive-market"]);
        // toys has keywords but no curated list
        assert_eq!(ids("toys", 3), vec!["earthhero-general", "thrive-market"]);
    }

    #[test]
    fn limit_caps_results() {
        assert_eq!(fallback("sports", 10).len(), 3);
        assert!(fallback("sports", 0).is_empty());
    }

    #[test]
    fn similarity_strictly_decreases_from_top_score() {
        assert_eq!(fallback_similarity(0), 0.95);
        assert_eq!(fallback_similarity(1), 0.90);
        assert_eq!(fallback_similarity(2), 0.85);
        let results = fallback("sports", 3);
        assert!(results.windows(2).all(|pair| pair[0].similarity > pair[1].similarity));
    }

    #[test]
    fn catalog_entries_cover_every_curated_list() {
        let entries = catalog_entries();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries.first().map(|entry| entry.id.0.as_str()), Some("patagonia-recycled-tee"));
        assert_eq!(entries.last().map(|entry| entry.id.0.as_str()), Some("thrive-market"));
    }
}
