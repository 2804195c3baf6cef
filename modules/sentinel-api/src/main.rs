use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gdelt_client::GdeltClient;
use sentinel_api::{router, AppState};
use sentinel_common::Config;
use sentinel_engine::{
    AlertStore, CoverageOracle, Orchestrator, Sentinel, UnavailableVerifier, VerificationOracle,
};
use verifier_client::VerifierClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sentinel=info".parse()?))
        .init();

    let config = Config::from_env()?;
    config.log_redacted();

    let verifier: Arc<dyn VerificationOracle> = match &config.verifier_url {
        Some(url) => Arc::new(VerifierClient::new(url.clone())),
        None => {
            info!("VERIFIER_URL not set, every claim will be scored as unverified");
            Arc::new(UnavailableVerifier)
        }
    };
    let coverage: Arc<dyn CoverageOracle> =
        Arc::new(GdeltClient::with_base_url(config.gdelt_base_url.clone()));

    let orchestrator =
        Orchestrator::new(verifier, coverage).with_oracle_timeout(config.oracle_timeout);
    let sentinel = Sentinel::new(orchestrator, Arc::new(AlertStore::new()));
    let app = router(Arc::new(AppState::new(sentinel)));

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!("Sentinel API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
