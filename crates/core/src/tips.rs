//! Sustainability tips shown alongside (or instead of) alternatives.

use crate::domain::tip::SustainabilityTip;
use crate::eligibility::is_limited_category;

#[derive(Debug, Clone, Copy)]
struct TipSeed {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

impl TipSeed {
    fn to_tip(self) -> SustainabilityTip {
        SustainabilityTip {
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

const GRAPHICS_HARDWARE_TIPS: &[TipSeed] = &[
    TipSeed {
        icon: "⚡",
        title: "Optimize Power Settings",
        description: "Cap the power limit or undervolt to cut energy use with little performance loss.",
    },
    TipSeed {
        icon: "♻️",
        title: "Recycle Old Hardware",
        description: "Take your previous card to a certified e-waste recycler instead of the bin.",
    },
    TipSeed {
        icon: "🔧",
        title: "Extend Its Lifespan",
        description: "Clean the fans and replace thermal paste to keep the card running for years.",
    },
    TipSeed {
        icon: "🔄",
        title: "Consider Buying Used",
        description: "Refurbished and second-hand cards avoid the footprint of new manufacturing.",
    },
];

const ELECTRONICS_TIPS: &[TipSeed] = &[
    TipSeed {
        icon: "🔋",
        title: "Check Energy Efficiency",
        description: "Look for ENERGY STAR or comparable ratings to reduce lifetime power use.",
    },
    TipSeed {
        icon: "🛠️",
        title: "Choose Repairable Devices",
        description: "Favor brands with good repairability scores and available spare parts.",
    },
    TipSeed {
        icon: "♻️",
        title: "Dispose Responsibly",
        description: "Use manufacturer take-back programs or certified e-waste recycling.",
    },
    TipSeed {
        icon: "⏳",
        title: "Keep It Longer",
        description: "Using a device for an extra year or two is the biggest footprint saving.",
    },
];

const GENERAL_TIPS: &[TipSeed] = &[
    TipSeed {
        icon: "🌱",
        title: "Consider the Brand's Impact",
        description: "Look for certifications like B-Corp, Fair Trade, or transparent sourcing.",
    },
    TipSeed {
        icon: "💪",
        title: "Prefer Durability",
        description: "A longer-lasting product beats a cheaper one you will replace sooner.",
    },
];

const GRAPHICS_INDICATORS: &[&str] = &["gpu", "graphics", "rtx", "nvidia", "amd radeon"];

/// Picks the tip set for a product. Graphics hardware wins over the limited
/// category set, which wins over the generic set.
pub fn tips_for(category: &str, title: &str) -> Vec<SustainabilityTip> {
    let title = title.to_lowercase();

    let seeds = if GRAPHICS_INDICATORS.iter().any(|indicator| title.contains(indicator)) {
        GRAPHICS_HARDWARE_TIPS
    } else if is_limited_category(category) {
        ELECTRONICS_TIPS
    } else {
        GENERAL_TIPS
    };

    seeds.iter().map(|seed| seed.to_tip()).collect()
}
