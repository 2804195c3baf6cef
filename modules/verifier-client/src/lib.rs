pub mod error;
pub mod types;

pub use error::{Result, VerifierError};
pub use types::{VerifyRequest, VerifyResponse, WireSource};

/// HTTP client for a claim verification service.
///
/// The service receives `{headline, content}` and answers with a
/// [`VerifyResponse`]. Responses are checked by [`validate`] before they are
/// handed to callers, so downstream code never sees an out-of-range
/// confidence or a verified verdict without sources.
pub struct VerifierClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VerifierClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn verify(&self, headline: &str, content: &str) -> Result<VerifyResponse> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { headline, content })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(VerifierError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let parsed: VerifyResponse = serde_json::from_str(&body)?;
        validate(&parsed)?;
        tracing::debug!(
            verified = parsed.is_verified,
            confidence = parsed.confidence_score,
            sources = parsed.sources.len(),
            "Verification verdict received"
        );
        Ok(parsed)
    }
}

pub fn validate(resp: &VerifyResponse) -> Result<()> {
    let confidence = resp.confidence_score;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(VerifierError::Invalid(format!(
            "confidence_score {confidence} outside [0, 1]"
        )));
    }
    if !resp.verification_time.is_finite() || resp.verification_time < 0.0 {
        return Err(VerifierError::Invalid(format!(
            "verification_time {} is not a duration",
            resp.verification_time
        )));
    }
    if resp.is_verified && resp.sources.is_empty() {
        return Err(VerifierError::Invalid(
            "verified verdict carries no supporting sources".to_string(),
        ));
    }
    if let Some(bad) = resp
        .sources
        .iter()
        .chain(resp.contradicting_sources.iter())
        .find(|s| s.url.trim().is_empty())
    {
        return Err(VerifierError::Invalid(format!(
            "source '{}' has an empty url",
            bad.title
        )));
    }
    Ok(())
}
