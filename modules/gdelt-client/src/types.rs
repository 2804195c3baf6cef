use serde::{Deserialize, Serialize};

/// Response body of `mode=artlist`. GDELT answers `{}` when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct ArtListResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub seendate: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub sourcecountry: String,
}

/// How much of the last 24h of coverage matched a headline.
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    pub total_articles: u32,
    pub trusted_articles: u32,
}
