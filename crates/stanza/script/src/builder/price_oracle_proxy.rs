//! Builder for the price oracle proxy.

use serde::Serialize;
use stanza_types::{Address, Event};
use stanza_utils::{Backend, Deployer, DeploymentOutcome, TxnConfig};
use stanza_world::{store_and_save_contract, IndexEntry, World};

use crate::dispatch::{dispatch, Pattern, PatternKind};
use crate::values::get_address;
use crate::ScriptError;

#[cfg(test)]
#[path = "price_oracle_proxy_test.rs"]
mod test;

/// The contract kind this builder deploys and indexes records under.
pub const PRICE_ORACLE_PROXY: &str = "PriceOracleProxy";

const DEPLOY_DOC: &str = r#"
    #### Price Oracle Proxy

    * "Deploy <Comptroller:Address> <PriceOracle:Address> <cETH:Address> <cUSDC:Address> <cDAI:Address>" - The Price Oracle which proxies to a backing oracle
    * E.g. "PriceOracleProxy Deploy (Unitroller Address) (PriceOracle Address) cETH cUSDC cDAI"
"#;

/// A deployed price oracle proxy instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceOracleProxy {
    pub address: Address,
}

#[derive(Debug, Clone)]
enum PriceOracleProxyCommand {
    Deploy {
        comptroller: Address,
        price_oracle: Address,
        c_eth: Address,
        c_usdc: Address,
        c_dai: Address,
    },
}

/// The record persisted into the world for a deployed proxy.
///
/// This is the durable sibling of the deployment outcome: it carries the
/// descriptive fields and, once the deployment succeeded, the proxy address,
/// while the outcome itself is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct OracleProxyRecord {
    pub description: String,
    pub address: Address,
    #[serde(rename = "cETH")]
    pub c_eth: Address,
    #[serde(rename = "cUSDC")]
    pub c_usdc: Address,
    #[serde(rename = "cDAI")]
    pub c_dai: Address,
}

fn bind_deploy(
    world: &World,
    event: &Event,
) -> Result<Option<PriceOracleProxyCommand>, ScriptError> {
    let Some(elements) = event.as_seq() else {
        return Ok(None);
    };

    match elements {
        [verb, comptroller, price_oracle, c_eth, c_usdc, c_dai]
            if verb.as_atom() == Some("Deploy") =>
        {
            Ok(Some(PriceOracleProxyCommand::Deploy {
                comptroller: get_address(world, comptroller)?,
                price_oracle: get_address(world, price_oracle)?,
                c_eth: get_address(world, c_eth)?,
                c_usdc: get_address(world, c_usdc)?,
                c_dai: get_address(world, c_dai)?,
            }))
        }
        _ => Ok(None),
    }
}

const PATTERNS: &[Pattern<PriceOracleProxyCommand>] = &[Pattern {
    name: "Deploy",
    doc: DEPLOY_DOC,
    kind: PatternKind::CatchAll,
    bind: bind_deploy,
}];

/// Deploys a price oracle proxy from a scripted command and records it into
/// the world under the `PriceOracleProxy` index.
///
/// The operation is a single linear attempt: resolution and dispatch failures
/// surface before the backend is touched, a failed deployment surfaces its
/// error with nothing persisted, and the world is mutated exactly once on the
/// success path.
pub async fn build_price_oracle_proxy<B>(
    world: &mut World,
    from: &Address,
    event: &Event,
    backend: &mut B,
) -> Result<(PriceOracleProxy, DeploymentOutcome<PriceOracleProxy>), ScriptError>
where
    B: Backend,
{
    let PriceOracleProxyCommand::Deploy { comptroller, price_oracle, c_eth, c_usdc, c_dai } =
        dispatch("DeployPriceOracleProxy", PATTERNS, world, event)?;

    let constructor_args = [
        comptroller,
        price_oracle,
        c_eth.clone(),
        c_usdc.clone(),
        c_dai.clone(),
    ];

    let mut deployer = Deployer::new(backend, from.clone(), TxnConfig::default());
    let mut outcome = deployer
        .deploy(PRICE_ORACLE_PROXY, &constructor_args)
        .await
        .map(|deployment| PriceOracleProxy { address: deployment.address });

    if let Some(error) = outcome.take_error() {
        return Err(error.into());
    }

    let proxy = outcome
        .value
        .clone()
        .expect("a deployment outcome without an error always carries a value");

    let record = OracleProxyRecord {
        description: "Price Oracle Proxy".to_string(),
        address: proxy.address.clone(),
        c_eth,
        c_usdc,
        c_dai,
    };

    store_and_save_contract(
        world,
        &proxy.address,
        PRICE_ORACLE_PROXY,
        &outcome,
        vec![IndexEntry {
            index: vec![PRICE_ORACLE_PROXY.to_string()],
            data: serde_json::to_value(&record).map_err(stanza_world::WorldError::from)?,
        }],
    )?;

    Ok((proxy, outcome))
}
