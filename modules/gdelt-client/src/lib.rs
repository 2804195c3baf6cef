pub mod error;
pub mod types;

pub use error::{GdeltError, Result};
pub use types::{ArtListResponse, Article, CoverageReport};

pub const DEFAULT_BASE_URL: &str = "https://api.gdeltproject.org/api/v2/doc/doc";

/// GDELT rejects requests without a browser-like user agent with 403.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Outlet name fragments counted as trusted coverage, matched against the article domain.
const TRUSTED_OUTLETS: [&str; 7] = [
    "bbc",
    "reuters",
    "cnn",
    "aljazeera",
    "apnews",
    "hindu",
    "timesofindia",
];

/// Number of leading headline words used as the search phrase.
const QUERY_WORDS: usize = 6;

const MAX_RECORDS: &str = "10";

pub struct GdeltClient {
    client: reqwest::Client,
    base_url: String,
}

impl GdeltClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Articles from the last 24h matching the headline's leading words.
    pub async fn article_list(&self, headline: &str) -> Result<Vec<Article>> {
        let query = build_query(headline);
        let resp = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("query", query.as_str()),
                ("mode", "artlist"),
                ("maxrecords", MAX_RECORDS),
                ("format", "json"),
                ("timespan", "24h"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GdeltError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Error pages come back as HTML with a 200, so parse by hand.
        let body = resp.text().await?;
        let parsed = parse_artlist(&body)?;
        tracing::debug!(query = %query, articles = parsed.articles.len(), "GDELT artlist fetched");
        Ok(parsed.articles)
    }

    /// Count total and trusted coverage for a headline.
    pub async fn coverage(&self, headline: &str) -> Result<CoverageReport> {
        let articles = self.article_list(headline).await?;
        Ok(summarize(&articles))
    }
}

impl Default for GdeltClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Quoted phrase of the first six alphanumeric words, restricted to English sources.
pub fn build_query(headline: &str) -> String {
    let clean: String = headline
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let keywords: Vec<&str> = clean.split_whitespace().take(QUERY_WORDS).collect();
    format!("\"{}\" sourcelang:eng", keywords.join(" "))
}

pub fn parse_artlist(body: &str) -> Result<ArtListResponse> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(ArtListResponse::default());
    }
    Ok(serde_json::from_str(trimmed)?)
}

pub fn is_trusted_outlet(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    TRUSTED_OUTLETS.iter().any(|t| domain.contains(t))
}

pub fn summarize(articles: &[Article]) -> CoverageReport {
    let trusted = articles
        .iter()
        .filter(|a| is_trusted_outlet(&a.domain))
        .count();
    CoverageReport {
        total_articles: articles.len() as u32,
        trusted_articles: trusted as u32,
    }
}
