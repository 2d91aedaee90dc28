use stanza_types::Address;
use thiserror::Error;

/// An error that occurs while deploying a contract through a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeploymentError {
    #[error("no artifact registered for contract `{0}`")]
    UnknownArtifact(String),
    #[error("contract already deployed at {0}")]
    AlreadyDeployed(Address),
    #[error("deployment out of gas: needed {needed}, limit {limit}")]
    OutOfGas { needed: u64, limit: u64 },
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}
