#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod record;
mod world;

pub use record::{ContractRecord, InvocationRecord};
pub use world::{store_and_save_contract, IndexEntry, World, WorldError};
