use std::sync::OnceLock;

use regex::Regex;

/// Categories with no meaningful greener substitute.
pub const LIMITED_CATEGORIES: &[&str] = &["electronics", "gaming", "computers", "gpu", "tech"];

const HARDWARE_PATTERN: &str = "gpu|graphics|rtx|gtx|radeon|nvidia|amd|processor|cpu|ram|ssd";

fn hardware_tokens() -> &'static Regex {
    static HARDWARE: OnceLock<Regex> = OnceLock::new();
    HARDWARE.get_or_init(|| Regex::new(HARDWARE_PATTERN).expect("hardware pattern is valid"))
}

/// Case and surrounding whitespace are ignored, matching the fallback lookup.
pub fn is_limited_category(category: &str) -> bool {
    let category = category.trim();
    LIMITED_CATEGORIES.iter().any(|limited| limited.eq_ignore_ascii_case(category))
}

/// Whether eco-alternatives should be skipped for this product. Tokens match
/// anywhere in the lower-cased title, so "ram" also hits "frame".
pub fn is_limited(category: &str, title: &str) -> bool {
    is_limited_category(category) || hardware_tokens().is_match(&title.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{is_limited, is_limited_category};

    #[test]
    fn limited_categories_short_circuit() {
        for category in ["electronics", "gaming", "computers", "gpu", "tech"] {
            assert!(is_limited(category, "Reusable Water Bottle"), "{category} should be limited");
        }
        assert!(!is_limited("clothing", "Organic Cotton Tee"));
    }

    #[test]
    fn category_match_ignores_case_and_padding() {
        assert!(is_limited_category("Electronics"));
        assert!(is_limited_category(" TECH "));
        assert!(is_limited("Gaming", "Reusable Water Bottle"));
        assert!(!is_limited_category("home"));
        assert!(!is_limited_category("electronic"));
    }

    #[test]
    fn hardware_tokens_match_case_insensitively() {
        for title in [
            "NVIDIA RTX 4090",
            "GeForce GTX 1080",
            "Radeon RX 7900",
            "AMD Ryzen 7",
            "Intel Core Processor",
            "CPU cooler",
            "32GB RAM kit",
            "1TB SSD",
            "Graphics tablet",
            "External GPU enclosure",
        ] {
            assert!(is_limited("general", title), "{title} should be limited");
        }
    }

    #[test]
    fn hardware_tokens_match_as_substrings() {
        assert!(is_limited("home", "Bamboo picture frame"));
        assert!(!is_limited("home", "Bamboo cutting board"));
    }
}
