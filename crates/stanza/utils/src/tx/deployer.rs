//! The deployer is in charge of deploying contracts through a backend.

use stanza_types::Address;
use tracing::trace;

use crate::backend::{Backend, Deployment};
use crate::{DeploymentOutcome, TxnConfig};

#[derive(Debug)]
pub struct Deployer<'a, B>
where
    B: Backend,
{
    /// The backend to deploy the contracts against.
    pub backend: &'a mut B,
    /// The identity recorded as the transaction originator.
    pub sender: Address,
    /// The transaction configuration.
    pub txn_config: TxnConfig,
}

impl<'a, B> Deployer<'a, B>
where
    B: Backend,
{
    /// Creates a new deployer.
    pub fn new(backend: &'a mut B, sender: Address, txn_config: TxnConfig) -> Self {
        Self { backend, sender, txn_config }
    }

    /// Deploys a contract, folding any backend failure into the outcome so
    /// the caller decides whether to raise it.
    pub async fn deploy(
        &mut self,
        label: &str,
        constructor_args: &[Address],
    ) -> DeploymentOutcome<Deployment> {
        trace!(label, sender = %self.sender, "Deploying contract.");

        match self
            .backend
            .deploy(&self.sender, label, constructor_args, self.txn_config.gas_limit)
            .await
        {
            Ok(deployment) => {
                trace!(
                    transaction_hash = %deployment.transaction_hash,
                    contract_address = %deployment.address,
                    "Deployed contract."
                );
                DeploymentOutcome::success(deployment)
            }
            Err(error) => {
                trace!(%error, "Deployment failed.");
                DeploymentOutcome::failure(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::backend::{ArtifactMeta, FailingBackend, InMemoryBackend};
    use crate::DeploymentError;

    fn sender() -> Address {
        "0x5c2dd1b43082ff5a8d006e93c56c222839843b89".parse().unwrap()
    }

    #[tokio::test]
    async fn test_deploy_success_outcome() {
        let mut backend = InMemoryBackend::new();
        backend.register_artifact(
            "PriceOracleProxy",
            ArtifactMeta { deploy_gas: 200_000, arg_gas: 10_000 },
        );

        let mut deployer = Deployer::new(&mut backend, sender(), TxnConfig::default());
        let outcome = deployer.deploy("PriceOracleProxy", &[]).await;

        assert!(!outcome.is_error());
        assert_eq!(outcome.gas_used, Some(200_000));
        assert!(outcome.transaction_hash.is_some());
        assert!(outcome.value.is_some());
    }

    #[tokio::test]
    async fn test_deploy_failure_is_folded_into_outcome() {
        let mut backend = FailingBackend::default();

        let mut deployer = Deployer::new(&mut backend, sender(), TxnConfig::default());
        let mut outcome = deployer.deploy("PriceOracleProxy", &[]).await;

        assert!(outcome.is_error());
        assert!(outcome.value.is_none());
        assert_matches!(outcome.take_error(), Some(DeploymentError::BackendUnavailable(_)));
        assert!(!outcome.is_error());
    }

    #[tokio::test]
    async fn test_gas_limit_is_forwarded() {
        let mut backend = InMemoryBackend::new();
        backend.register_artifact(
            "PriceOracleProxy",
            ArtifactMeta { deploy_gas: 200_000, arg_gas: 10_000 },
        );

        let mut deployer = Deployer::new(&mut backend, sender(), TxnConfig::with_gas_limit(1));
        let mut outcome = deployer.deploy("PriceOracleProxy", &[]).await;

        assert_matches!(
            outcome.take_error(),
            Some(DeploymentError::OutOfGas { needed: 200_000, limit: 1 })
        );
    }
}
