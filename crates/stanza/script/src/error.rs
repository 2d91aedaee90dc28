use stanza_types::EventParseError;
use stanza_utils::DeploymentError;
use stanza_world::WorldError;
use thiserror::Error;

use crate::values::ResolveError;

/// An error raised while executing a scenario command.
///
/// Collaborator failures are surfaced verbatim; this layer adds no error
/// translation of its own.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] EventParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("no pattern of `{operation}` matches the command; recognized patterns:\n{docs}")]
    NoPatternMatched { operation: String, docs: String },
    #[error("unknown contract kind `{0}`")]
    UnknownContractKind(String),
    #[error("empty command")]
    EmptyCommand,
}
