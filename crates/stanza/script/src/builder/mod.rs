//! Contract builders, one module per contract kind.
//!
//! A top-level scenario event names the contract kind first; the router
//! hands the remaining tokens to that kind's builder.

use stanza_types::{Address, Event};
use stanza_utils::Backend;
use stanza_world::World;

use crate::ScriptError;

mod price_oracle_proxy;

pub use price_oracle_proxy::{
    build_price_oracle_proxy, OracleProxyRecord, PriceOracleProxy, PRICE_ORACLE_PROXY,
};

/// The contract handle produced by routing one scenario event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    PriceOracleProxy(PriceOracleProxy),
}

impl BuildOutcome {
    pub fn address(&self) -> &Address {
        match self {
            BuildOutcome::PriceOracleProxy(proxy) => &proxy.address,
        }
    }

    /// The contract kind the handle belongs to.
    pub fn label(&self) -> &'static str {
        match self {
            BuildOutcome::PriceOracleProxy(_) => PRICE_ORACLE_PROXY,
        }
    }
}

/// Routes a top-level scenario event (`<ContractKind> <command...>`) to the
/// builder for its contract kind.
pub async fn process_event<B>(
    world: &mut World,
    from: &Address,
    event: &Event,
    backend: &mut B,
) -> Result<BuildOutcome, ScriptError>
where
    B: Backend,
{
    let elements = event.as_seq().ok_or(ScriptError::EmptyCommand)?;
    let (head, rest) = elements.split_first().ok_or(ScriptError::EmptyCommand)?;
    let kind =
        head.as_atom().ok_or_else(|| ScriptError::UnknownContractKind(head.to_string()))?;

    match kind {
        PRICE_ORACLE_PROXY => {
            let command = Event::Seq(rest.to_vec());
            let (proxy, _) = build_price_oracle_proxy(world, from, &command, backend).await?;
            Ok(BuildOutcome::PriceOracleProxy(proxy))
        }
        other => Err(ScriptError::UnknownContractKind(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use stanza_utils::{ArtifactMeta, InMemoryBackend};

    use super::*;

    fn sender() -> Address {
        "0x5c2dd1b43082ff5a8d006e93c56c222839843b89".parse().unwrap()
    }

    #[tokio::test]
    async fn test_routes_to_price_oracle_proxy_builder() {
        let mut world = World::new("test");
        let mut backend = InMemoryBackend::new();
        backend.register_artifact(
            PRICE_ORACLE_PROXY,
            ArtifactMeta { deploy_gas: 1_500_000, arg_gas: 32_000 },
        );

        let event = Event::parse(
            "PriceOracleProxy Deploy 0xComptroller 0xOracle 0xCETH 0xCUSDC 0xCDAI",
        )
        .unwrap();

        let outcome = process_event(&mut world, &sender(), &event, &mut backend).await.unwrap();

        assert_eq!(world.contract("PriceOracleProxy").unwrap().address, *outcome.address());
    }

    #[tokio::test]
    async fn test_unknown_contract_kind() {
        let mut world = World::new("test");
        let mut backend = InMemoryBackend::new();

        let event = Event::parse("Comptroller Deploy").unwrap();
        let result = process_event(&mut world, &sender(), &event, &mut backend).await;

        assert_matches!(
            result,
            Err(ScriptError::UnknownContractKind(kind)) if kind == "Comptroller"
        );
    }
}
