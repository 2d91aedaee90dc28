//! Deployment backends.
//!
//! A backend stands in for the chain a scenario runs against. The in-memory
//! backend keeps the whole chain state in maps and derives addresses and
//! transaction hashes deterministically, so two runs of the same script
//! produce the same world.

use std::collections::HashMap;

use alloy_primitives::{hex, keccak256};
use async_trait::async_trait;
use indexmap::IndexMap;
use smol_str::SmolStr;
use stanza_types::Address;

use crate::DeploymentError;

/// A successful deployment reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub transaction_hash: String,
    pub gas_used: u64,
}

/// The chain collaborator a scenario deploys against.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Deploys the contract registered under `label` with the given
    /// constructor arguments, charging gas against `gas_limit` if one is set.
    async fn deploy(
        &mut self,
        sender: &Address,
        label: &str,
        constructor_args: &[Address],
        gas_limit: Option<u64>,
    ) -> Result<Deployment, DeploymentError>;

    /// Checks if a contract is deployed at the given address.
    fn is_deployed(&self, address: &Address) -> bool;

    fn nonce(&self, sender: &Address) -> u64;
}

/// Deployment cost descriptor for a contract artifact.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactMeta {
    /// Base gas charged for the deployment transaction.
    pub deploy_gas: u64,
    /// Additional gas charged per constructor argument.
    pub arg_gas: u64,
}

/// A contract instance tracked by the in-memory backend.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub label: SmolStr,
    pub deployer: Address,
    pub constructor_args: Vec<Address>,
}

/// In-memory chain stand-in with per-sender nonces and a per-label artifact
/// registry for gas accounting.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    artifacts: IndexMap<SmolStr, ArtifactMeta>,
    deployed: IndexMap<Address, DeployedContract>,
    nonces: HashMap<Address, u64>,
    deploy_attempts: u64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an artifact, replacing any previous registration for `label`.
    pub fn register_artifact(&mut self, label: impl Into<SmolStr>, meta: ArtifactMeta) {
        self.artifacts.insert(label.into(), meta);
    }

    pub fn deployment(&self, address: &Address) -> Option<&DeployedContract> {
        self.deployed.get(address)
    }

    /// Number of deployments this backend has been asked to perform,
    /// including rejected ones.
    pub fn deploy_attempts(&self) -> u64 {
        self.deploy_attempts
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn deploy(
        &mut self,
        sender: &Address,
        label: &str,
        constructor_args: &[Address],
        gas_limit: Option<u64>,
    ) -> Result<Deployment, DeploymentError> {
        self.deploy_attempts += 1;

        let meta = self
            .artifacts
            .get(label)
            .ok_or_else(|| DeploymentError::UnknownArtifact(label.to_string()))?;

        let gas_used = meta.deploy_gas + meta.arg_gas * constructor_args.len() as u64;
        if let Some(limit) = gas_limit {
            if gas_used > limit {
                return Err(DeploymentError::OutOfGas { needed: gas_used, limit });
            }
        }

        let nonce = self.nonce(sender);
        let address = derive_contract_address(sender, nonce);
        if self.is_deployed(&address) {
            return Err(DeploymentError::AlreadyDeployed(address));
        }

        let transaction_hash = derive_transaction_hash(sender, nonce, label);
        self.nonces.insert(sender.clone(), nonce + 1);
        self.deployed.insert(
            address.clone(),
            DeployedContract {
                label: SmolStr::new(label),
                deployer: sender.clone(),
                constructor_args: constructor_args.to_vec(),
            },
        );

        Ok(Deployment { address, transaction_hash, gas_used })
    }

    fn is_deployed(&self, address: &Address) -> bool {
        self.deployed.contains_key(address)
    }

    fn nonce(&self, sender: &Address) -> u64 {
        self.nonces.get(sender).copied().unwrap_or_default()
    }
}

/// A backend that rejects every deployment.
///
/// Stands in for an unreachable chain so failure paths can be exercised
/// without any state behind them.
#[derive(Debug, Default)]
pub struct FailingBackend {
    pub deploy_attempts: u64,
}

#[async_trait]
impl Backend for FailingBackend {
    async fn deploy(
        &mut self,
        _sender: &Address,
        _label: &str,
        _constructor_args: &[Address],
        _gas_limit: Option<u64>,
    ) -> Result<Deployment, DeploymentError> {
        self.deploy_attempts += 1;
        Err(DeploymentError::BackendUnavailable("deployments are rejected by this backend".to_string()))
    }

    fn is_deployed(&self, _address: &Address) -> bool {
        false
    }

    fn nonce(&self, _sender: &Address) -> u64 {
        0
    }
}

/// Computes the address a contract deployed by `sender` at `nonce` lives at:
/// the low 20 bytes of `keccak256(sender || nonce)`.
pub fn derive_contract_address(sender: &Address, nonce: u64) -> Address {
    let mut input = sender.as_str().as_bytes().to_vec();
    input.extend_from_slice(&nonce.to_be_bytes());

    let hash = keccak256(&input);
    let token = format!("0x{}", hex::encode(&hash[12..]));
    token.parse().expect("keccak-derived addresses are always valid tokens")
}

fn derive_transaction_hash(sender: &Address, nonce: u64, label: &str) -> String {
    let mut input = sender.as_str().as_bytes().to_vec();
    input.extend_from_slice(&nonce.to_be_bytes());
    input.extend_from_slice(label.as_bytes());

    format!("0x{}", hex::encode(keccak256(&input)))
}

/// The accounts every fresh world starts with.
pub fn genesis_accounts() -> Vec<(SmolStr, Address)> {
    ["root", "alice", "bob"]
        .iter()
        .map(|name| {
            let hash = keccak256(format!("stanza.account.{name}").as_bytes());
            let token = format!("0x{}", hex::encode(&hash[12..]));
            let address =
                token.parse().expect("keccak-derived addresses are always valid tokens");
            (SmolStr::new(*name), address)
        })
        .collect()
}
