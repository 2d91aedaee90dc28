pub mod deployer;
pub mod error;

use crate::backend::Deployment;
use self::error::DeploymentError;

/// The transaction configuration to use when sending a deployment.
#[derive(Debug, Copy, Clone, Default)]
pub struct TxnConfig {
    /// Reject the deployment when its gas cost exceeds this limit.
    /// If `None` is provided, the backend charges whatever the artifact costs.
    pub gas_limit: Option<u64>,
}

impl TxnConfig {
    pub fn with_gas_limit(gas_limit: u64) -> Self {
        Self { gas_limit: Some(gas_limit) }
    }
}

/// The outcome of a single deployment attempt.
///
/// Exactly one of `value` and `error` is set. The outcome is transient: it is
/// inspected right after the attempt and never persisted into the world, only
/// its transaction hash survives in the stored record.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome<T> {
    /// The resulting handle, on success.
    pub value: Option<T>,
    /// The deployment failure, if any.
    pub error: Option<DeploymentError>,
    pub transaction_hash: Option<String>,
    pub gas_used: Option<u64>,
}

impl DeploymentOutcome<Deployment> {
    pub fn success(deployment: Deployment) -> Self {
        Self {
            transaction_hash: Some(deployment.transaction_hash.clone()),
            gas_used: Some(deployment.gas_used),
            value: Some(deployment),
            error: None,
        }
    }
}

impl<T> DeploymentOutcome<T> {
    pub fn failure(error: DeploymentError) -> Self {
        Self { value: None, error: Some(error), transaction_hash: None, gas_used: None }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Removes and returns the failure, leaving a success-path outcome behind.
    pub fn take_error(&mut self) -> Option<DeploymentError> {
        self.error.take()
    }

    /// Maps the success value, keeping the transaction data untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DeploymentOutcome<U> {
        DeploymentOutcome {
            value: self.value.map(f),
            error: self.error,
            transaction_hash: self.transaction_hash,
            gas_used: self.gas_used,
        }
    }
}
