use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilityTip {
    pub icon: String,
    pub title: String,
    pub description: String,
}
