//! Ordered pattern dispatch for builder commands.
//!
//! Each builder declares its recognized commands as a list of [`Pattern`]s.
//! Exact patterns are tried in declaration order; catch-all patterns only
//! once every exact pattern has declined. A pattern binds by returning the
//! typed command variant, so matching and execution stay separate steps.

use stanza_types::Event;
use stanza_world::World;
use tracing::trace;

use crate::ScriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Exact,
    /// Fallback route, consuming whatever the exact patterns left unmatched.
    CatchAll,
}

/// A documented command pattern and its binder.
///
/// The binder returns `Ok(None)` to decline the event, `Ok(Some(_))` with the
/// bound command on a match, or an error when the event matched the shape but
/// an argument failed to resolve.
pub struct Pattern<C> {
    pub name: &'static str,
    pub doc: &'static str,
    pub kind: PatternKind,
    pub bind: fn(&World, &Event) -> Result<Option<C>, ScriptError>,
}

/// Matches `event` against the patterns of `operation` and returns the bound
/// command of the first pattern that accepts it.
pub fn dispatch<C>(
    operation: &str,
    patterns: &[Pattern<C>],
    world: &World,
    event: &Event,
) -> Result<C, ScriptError> {
    for kind in [PatternKind::Exact, PatternKind::CatchAll] {
        for pattern in patterns.iter().filter(|p| p.kind == kind) {
            if let Some(command) = (pattern.bind)(world, event)? {
                trace!(operation, pattern = pattern.name, "Pattern matched.");
                return Ok(command);
            }
        }
    }

    Err(ScriptError::NoPatternMatched {
        operation: operation.to_string(),
        docs: patterns.iter().map(|p| p.doc.trim()).collect::<Vec<_>>().join("\n"),
    })
}
