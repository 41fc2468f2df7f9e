use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One captured state of a gig listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigSnapshot {
    pub url: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub subcategory2: Option<String>,
    pub seller_level: String,
    pub orders_in_queue: Option<u32>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub description: Option<String>,
    pub favorite_count: Option<u64>,
    pub packages: IndexMap<String, Package>,
    pub faqs: Vec<Faq>,
    pub hourly_rate: Option<String>,
    pub snapshot_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub delivery_time: Option<String>,
    pub revisions: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl GigSnapshot {
    /// 2-space indented JSON, non-ASCII left as-is.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ── Tests ──
