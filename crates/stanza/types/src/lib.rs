#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod address;
pub mod event;

pub use address::{Address, AddressParseError};
pub use event::{Event, EventParseError};
