pub mod action_log;
pub mod citations;
pub mod classify;
pub mod crisis;
pub mod narrative;
pub mod oracle;
pub mod orchestrator;
pub mod scoring;
pub mod sentinel;
pub mod stats;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod viral;

pub use oracle::{CoverageOracle, OracleFailure, UnavailableVerifier, VerificationOracle};
pub use orchestrator::{AnalysisOptions, Orchestrator};
pub use sentinel::Sentinel;
pub use stats::SystemStats;
pub use store::{AlertStore, ApprovalReceipt, ClearedCounts, RejectionReceipt};
