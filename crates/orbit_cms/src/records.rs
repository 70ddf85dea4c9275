use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Paged query envelope returned by the content repository.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub results: Vec<RawRecord>,
    /// Opaque URL of the following page, absent on the last one.
    #[serde(default)]
    pub next_page: Option<String>,
}

/// One repository record as stored upstream. Only the envelope fields are
/// typed here; `data` stays untyped until the normalizer validates it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub data: Value,
}
