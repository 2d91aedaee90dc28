//! The world threaded through every scenario operation.
//!
//! A world is created once per scenario run and mutated by each builder
//! through an exclusive reference. It is the only state there is: named
//! accounts, the index of stored contract records, and the invocation
//! history. When a backing file is configured, every store writes the whole
//! world back to disk as pretty JSON, so a run can be resumed or inspected.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use stanza_types::Address;
use stanza_utils::DeploymentOutcome;
use tracing::trace;

use crate::record::{ContractRecord, InvocationRecord};

#[cfg(test)]
#[path = "world_test.rs"]
mod test;

/// An error that occurs while storing or persisting the world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A contract record to store, associated with one index key for later lookup.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Path-like index key, joined with `.` for storage.
    pub index: Vec<String>,
    /// The serialized record to persist.
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// The network this world tracks deployments for.
    pub network: SmolStr,
    accounts: IndexMap<SmolStr, Address>,
    contracts: Vec<ContractRecord>,
    invocations: Vec<InvocationRecord>,
    #[serde(skip)]
    save_path: Option<Utf8PathBuf>,
}

impl World {
    /// Creates an empty world for the given network.
    pub fn new(network: impl Into<SmolStr>) -> Self {
        Self {
            network: network.into(),
            accounts: IndexMap::new(),
            contracts: vec![],
            invocations: vec![],
            save_path: None,
        }
    }

    /// Configures the file every store writes the world back to.
    pub fn with_save_path(mut self, path: Utf8PathBuf) -> Self {
        self.save_path = Some(path);
        self
    }

    pub fn add_account(&mut self, name: impl Into<SmolStr>, address: Address) {
        self.accounts.insert(name.into(), address);
    }

    pub fn account(&self, name: &str) -> Option<&Address> {
        self.accounts.get(name)
    }

    pub fn accounts(&self) -> &IndexMap<SmolStr, Address> {
        &self.accounts
    }

    /// Looks up the latest contract record stored under the given index key.
    /// A linear scan, but the store is not the critical path of a run.
    pub fn contract(&self, index: &str) -> Option<&ContractRecord> {
        self.contracts.iter().rev().find(|record| record.index == index)
    }

    pub fn contracts(&self) -> &[ContractRecord] {
        &self.contracts
    }

    pub fn invocations(&self) -> &[InvocationRecord] {
        &self.invocations
    }

    /// Loads a world from a JSON file previously written by [`Self::write_to_path`].
    /// The loaded world keeps the file as its save path.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, WorldError> {
        let file = fs::File::open(path)?;
        let mut world: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        world.save_path = Some(path.to_path_buf());
        Ok(world)
    }

    /// Writes the world as pretty JSON, creating parent directories as needed.
    pub fn write_to_path(&self, path: &Utf8Path) -> Result<(), WorldError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Stores a deployed contract into the world under each index entry and
/// appends the invocation to the history. When the world has a backing file,
/// the updated world is written back to it.
pub fn store_and_save_contract<T>(
    world: &mut World,
    address: &Address,
    label: &str,
    outcome: &DeploymentOutcome<T>,
    entries: Vec<IndexEntry>,
) -> Result<(), WorldError> {
    for entry in entries {
        let key = SmolStr::new(entry.index.join("."));
        trace!(%key, contract_address = %address, "Storing contract record.");

        world.contracts.push(ContractRecord {
            index: key,
            label: SmolStr::new(label),
            address: address.clone(),
            transaction_hash: outcome.transaction_hash.clone(),
            data: entry.data,
        });
    }

    world.invocations.push(InvocationRecord {
        label: SmolStr::new(label),
        address: Some(address.clone()),
        transaction_hash: outcome.transaction_hash.clone(),
        success: !outcome.is_error(),
    });

    if let Some(path) = world.save_path.clone() {
        world.write_to_path(&path)?;
        trace!(%path, "Saved world.");
    }

    Ok(())
}
