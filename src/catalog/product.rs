use serde::{Deserialize, Serialize};

/// One catalog entry. Field names follow the JSON resource the generated
/// pages consume (camelCase on the wire). Optional fields deserialize to
/// defaults so a sparse record renders degraded instead of failing the
/// whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within the catalog; relied on for detail lookup, not
    /// validated on load.
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub price: f64,
    /// Present only when discounted; assumed >= price by the discount badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// 0-5 scale.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Sort key only: featured items lead the default ordering.
    #[serde(default)]
    pub featured: bool,
    /// ISO date string (YYYY-MM-DD). Missing sorts as the empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    #[serde(default)]
    pub affiliate_url: String,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Key used by the `newest` sort: lexical compare over the raw date
    /// string, missing treated as empty (so un-dated items trail real
    /// dates under descending order's tail).
    pub fn date_key(&self) -> &str {
        self.date_added.as_deref().unwrap_or("")
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self.original_price, Some(orig) if orig > self.price)
    }
}

/// Known badge tags. The set is open-ended: unknown values degrade to
/// literal display rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Bestseller,
    New,
    Sale,
}

impl Badge {
    pub fn parse(raw: &str) -> Option<Badge> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bestseller" => Some(Badge::Bestseller),
            "new" => Some(Badge::New),
            "sale" => Some(Badge::Sale),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Bestseller => "Bestseller",
            Badge::New => "New",
            Badge::Sale => "Sale",
        }
    }
}

/// Display label for a raw badge value: canonical casing for known tags,
/// the literal text otherwise.
pub fn badge_label(raw: &str) -> String {
    match Badge::parse(raw) {
        Some(badge) => badge.label().to_string(),
        None => raw.to_string(),
    }
}
