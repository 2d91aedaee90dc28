#![cfg_attr(not(test), warn(unused_crate_dependencies))]

//! The scripted command surface of the scenario harness.
//!
//! A scenario line is parsed into an [`stanza_types::Event`], routed to the
//! builder for its contract kind, matched against that builder's documented
//! command patterns, and executed against a deployment backend. Results are
//! recorded into the [`stanza_world::World`].

pub mod builder;
pub mod dispatch;
mod error;
pub mod values;

pub use builder::{process_event, BuildOutcome};
pub use error::ScriptError;
