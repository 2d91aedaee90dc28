#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod backend;
mod tx;

pub use backend::*;
pub use tx::deployer::*;
pub use tx::error::DeploymentError;
pub use tx::*;
