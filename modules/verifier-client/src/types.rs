use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub headline: &'a str,
    pub content: &'a str,
}

/// Wire shape of a verification verdict. Only `is_verified` and
/// `confidence_score` are mandatory; everything else defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub is_verified: bool,
    pub confidence_score: f64,
    #[serde(default)]
    pub sources: Vec<WireSource>,
    #[serde(default)]
    pub contradicting_sources: Vec<WireSource>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub verification_time: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSource {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published_date: Option<String>,
}
