use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single published edition as read from the catalog. The catalog owns
/// these records; this crate only consumes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Edition {
    #[serde(default)]
    pub isbn_10: Vec<String>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub covers: Vec<i64>,
    #[serde(default)]
    pub number_of_pages: Option<u32>,
    #[serde(default)]
    pub works: Vec<WorkRef>,
}

impl Edition {
    /// Identifier of the work this edition belongs to, if any.
    pub fn work_id(&self) -> Option<&str> {
        self.works.first().map(|w| w.id())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRef {
    pub key: String,
}

impl WorkRef {
    /// "/works/OL123W" -> "OL123W"
    pub fn id(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

/// Per-work status record from the holdings service. A missing `status`
/// field is read as "error", i.e. the service could not determine it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

fn unknown_status() -> String {
    "error".to_string()
}

/// Raw answer from the dedupe registry: `response` is the "do we want it"
/// flag, `books` the matching records (scanned, promised or sponsored).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupeResponse {
    #[serde(default)]
    pub response: i64,
    #[serde(default)]
    pub books: Vec<serde_json::Value>,
}

impl DedupeResponse {
    pub fn wanted(&self) -> bool {
        self.response != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub book_cost_cents: u64,
    pub scan_price_cents: u64,
    pub total_price_cents: u64,
}

/// The one output artifact of the pipeline. Recomputed fresh on every
/// call; `is_eligible` and `url` are always present, `price` and `error`
/// only where the path that produced the verdict set them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_eligible: bool,
    pub price: Option<PriceQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VerdictError>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictError {
    pub reason: String,
    pub values: serde_json::Value,
}

/// One sponsorship contribution as reported by the CRM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipRecord {
    pub isbn: String,
    pub context: String,
    pub receive_date: String,
    pub total_amount: String,
}

impl SponsorshipRecord {
    /// CRM timestamps come back as "2020-01-15 10:30:00".
    pub fn received_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.receive_date, "%Y-%m-%d %H:%M:%S").ok()
    }
}
