use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareFeature {
    pub name: String,
    pub included: bool,
    pub detail: Option<String>,
}

impl FareFeature {
    pub fn new(name: &str, included: bool, detail: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            included,
            detail: detail.map(str::to_string),
        }
    }
}

/// A fare tier (basic / main / business). Exactly one is chosen per booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareBundle {
    pub id: String,
    pub name: String,
    pub price: i32,
    #[serde(default)]
    pub popular: bool,
    pub features: Vec<FareFeature>,
}

impl FareBundle {
    pub fn includes(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.name == feature && f.included)
    }

    /// Display label, e.g. `Included` or `+$75`.
    pub fn price_label(&self) -> String {
        if self.price == 0 {
            "Included".to_string()
        } else {
            format!("+${}", self.price)
        }
    }
}
