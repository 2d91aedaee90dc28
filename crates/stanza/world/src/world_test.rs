use camino::Utf8PathBuf;
use serde_json::json;
use similar_asserts::assert_eq;
use stanza_types::Address;
use stanza_utils::{Deployment, DeploymentOutcome};

use super::*;

fn address(token: &str) -> Address {
    token.parse().unwrap()
}

fn outcome(tx: &str) -> DeploymentOutcome<Deployment> {
    DeploymentOutcome::success(Deployment {
        address: address("0xaaaa"),
        transaction_hash: tx.to_string(),
        gas_used: 21_000,
    })
}

#[test]
fn test_store_indexes_record() {
    let mut world = World::new("development");

    store_and_save_contract(
        &mut world,
        &address("0xaaaa"),
        "PriceOracleProxy",
        &outcome("0xt1"),
        vec![IndexEntry {
            index: vec!["PriceOracleProxy".to_string()],
            data: json!({ "description": "Price Oracle Proxy" }),
        }],
    )
    .unwrap();

    let record = world.contract("PriceOracleProxy").unwrap();
    assert_eq!(record.address, address("0xaaaa"));
    assert_eq!(record.transaction_hash.as_deref(), Some("0xt1"));
    assert_eq!(record.data["description"], "Price Oracle Proxy");

    assert_eq!(world.invocations().len(), 1);
    assert!(world.invocations()[0].success);
}

#[test]
fn test_store_appends_without_clobbering() {
    let mut world = World::new("development");

    store_and_save_contract(
        &mut world,
        &address("0xaaaa"),
        "PriceOracleProxy",
        &outcome("0xt1"),
        vec![IndexEntry {
            index: vec!["PriceOracleProxy".to_string()],
            data: json!({ "cETH": "0xCETH" }),
        }],
    )
    .unwrap();

    store_and_save_contract(
        &mut world,
        &address("0xbbbb"),
        "PriceOracle",
        &outcome("0xt2"),
        vec![IndexEntry {
            index: vec!["PriceOracle".to_string()],
            data: json!({ "description": "Fixed Price Oracle" }),
        }],
    )
    .unwrap();

    assert_eq!(world.contracts().len(), 2);
    assert_eq!(world.contract("PriceOracleProxy").unwrap().data["cETH"], "0xCETH");
    assert_eq!(world.contract("PriceOracle").unwrap().address, address("0xbbbb"));
    assert_eq!(world.invocations().len(), 2);
}

#[test]
fn test_same_index_appends_and_latest_wins() {
    let mut world = World::new("development");

    for (addr, tx, c_eth) in [("0xaaaa", "0xt1", "0xA"), ("0xbbbb", "0xt2", "0xB")] {
        store_and_save_contract(
            &mut world,
            &address(addr),
            "PriceOracleProxy",
            &outcome(tx),
            vec![IndexEntry {
                index: vec!["PriceOracleProxy".to_string()],
                data: json!({ "cETH": c_eth }),
            }],
        )
        .unwrap();
    }

    // Both records survive; lookups see the latest one.
    assert_eq!(world.contracts().len(), 2);
    assert_eq!(world.contracts()[0].data["cETH"], "0xA");
    assert_eq!(world.contract("PriceOracleProxy").unwrap().data["cETH"], "0xB");
}

#[test]
fn test_nested_index_key() {
    let mut world = World::new("development");

    store_and_save_contract(
        &mut world,
        &address("0xcccc"),
        "CToken",
        &outcome("0xt3"),
        vec![IndexEntry {
            index: vec!["CToken".to_string(), "cETH".to_string()],
            data: json!({}),
        }],
    )
    .unwrap();

    assert!(world.contract("CToken.cETH").is_some());
    assert!(world.contract("CToken").is_none());
}

#[test]
fn test_accounts() {
    let mut world = World::new("development");
    world.add_account("root", address("0x1234"));

    assert_eq!(world.account("root"), Some(&address("0x1234")));
    assert_eq!(world.account("alice"), None);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("development.json")).unwrap();

    let mut world = World::new("development").with_save_path(path.clone());
    world.add_account("root", address("0x1234"));

    store_and_save_contract(
        &mut world,
        &address("0xaaaa"),
        "PriceOracleProxy",
        &outcome("0xt1"),
        vec![IndexEntry {
            index: vec!["PriceOracleProxy".to_string()],
            data: json!({ "description": "Price Oracle Proxy" }),
        }],
    )
    .unwrap();

    let loaded = World::load_from_path(&path).unwrap();
    assert_eq!(loaded.network, "development");
    assert_eq!(loaded.account("root"), Some(&address("0x1234")));
    assert_eq!(loaded.contract("PriceOracleProxy"), world.contract("PriceOracleProxy"));
    assert_eq!(loaded.invocations(), world.invocations());
}
