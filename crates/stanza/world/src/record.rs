use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use stanza_types::Address;

/// A contract record stored in the world under an index key.
///
/// Records are append-only: storing under an existing index adds a new record
/// and lookups return the latest one, so earlier deployments keep their data.
/// `data` carries the builder-specific record, already stripped of anything
/// transient; only serializable history lands here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// The index key this record is looked up by.
    pub index: SmolStr,
    /// The contract kind this record was stored as.
    pub label: SmolStr,
    pub address: Address,
    pub transaction_hash: Option<String>,
    pub data: serde_json::Value,
}

/// One entry of the world's invocation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub label: SmolStr,
    pub address: Option<Address>,
    pub transaction_hash: Option<String>,
    pub success: bool,
}
