//! Keyword-based product category detection.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Clothing,
    Electronics,
    Home,
    Beauty,
    Food,
    Toys,
    Sports,
    General,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clothing => "clothing",
            Self::Electronics => "electronics",
            Self::Home => "home",
            Self::Beauty => "beauty",
            Self::Food => "food",
            Self::Toys => "toys",
            Self::Sports => "sports",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category keyword table. Order is classification priority: the first
/// category with any matching keyword wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Clothing,
        &[
            "shirt", "pants", "dress", "jacket", "sweater", "jeans", "hoodie", "shorts", "skirt",
            "coat", "blouse", "top", "tee", "t-shirt", "socks", "underwear", "apparel", "wear",
        ],
    ),
    (
        Category::Electronics,
        &[
            "phone",
            "laptop",
            "computer",
            "tablet",
            "headphone",
            "speaker",
            "camera",
            "tv",
            "television",
            "monitor",
            "keyboard",
            "mouse",
            "charger",
            "cable",
            "watch",
            "earbuds",
            "airpods",
            "gpu",
            "graphics card",
        ],
    ),
    (
        Category::Home,
        &[
            "furniture",
            "chair",
            "table",
            "desk",
            "lamp",
            "rug",
            "pillow",
            "blanket",
            "towel",
            "sheet",
            "mattress",
            "cleaning",
            "storage",
            "kitchen",
            "cookware",
            "dinnerware",
        ],
    ),
    (
        Category::Beauty,
        &[
            "shampoo",
            "conditioner",
            "lotion",
            "cream",
            "serum",
            "makeup",
            "lipstick",
            "mascara",
            "skincare",
            "soap",
            "body wash",
            "deodorant",
            "perfume",
            "cologne",
            "moisturizer",
        ],
    ),
    (
        Category::Food,
        &[
            "snack",
            "coffee",
            "tea",
            "chocolate",
            "protein",
            "vitamin",
            "supplement",
            "organic",
            "grocery",
            "food",
            "drink",
            "beverage",
        ],
    ),
    (
        Category::Toys,
        &["toy", "game", "puzzle", "lego", "doll", "action figure", "board game", "stuffed"],
    ),
    (
        Category::Sports,
        &[
            "fitness", "yoga", "exercise", "gym", "running", "cycling", "hiking", "camping",
            "outdoor", "sports", "athletic",
        ],
    ),
];

/// Detects the category of a product from its title. Keywords match as
/// case-insensitive substrings; unmatched titles fall into
/// [`Category::General`].
pub fn classify(title: &str) -> Category {
    let title = title.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::{classify, Category};

    #[test]
    fn gpu_titles_are_electronics() {
        assert_eq!(classify("NVIDIA RTX 4090 Graphics Card"), Category::Electronics);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ORGANIC COFFEE BEANS"), Category::Food);
        assert_eq!(classify("Yoga Mat"), Category::Sports);
    }

    #[test]
    fn earlier_category_wins_on_ambiguous_titles() {
        // "chair" is home, "shirt" is clothing; clothing is declared first.
        assert_eq!(classify("Chair cover shaped like a shirt"), Category::Clothing);
        assert_eq!(classify("Desk lamp with phone charger"), Category::Electronics);
        // "top" inside "laptop" is a clothing keyword.
        assert_eq!(classify("Laptop desk"), Category::Clothing);
        // "lego" is toys, "outdoor" is sports.
        assert_eq!(classify("Lego outdoor set"), Category::Toys);
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        // "tea" inside "steak" is enough; priority then decides.
        assert_eq!(classify("Steak knife"), Category::Food);
        assert_eq!(classify("Sweatshirt"), Category::Clothing);
    }

    #[test]
    fn unmatched_titles_are_general() {
        assert_eq!(classify("Widget 3000"), Category::General);
        assert_eq!(classify(""), Category::General);
    }

    #[test]
    fn display_matches_labels() {
        assert_eq!(Category::Home.to_string(), "home");
        assert_eq!(Category::General.as_str(), "general");
    }
}
