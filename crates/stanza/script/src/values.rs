//! Resolution of script tokens into typed values.
//!
//! Address arguments come in three spellings: a literal `0x` token, a bare
//! alias naming an account or a stored contract, or an `(<Alias> Address)`
//! sub-expression. All three resolve against the current world.

use stanza_types::{Address, AddressParseError, Event};
use stanza_world::World;

/// An error that occurs while resolving a script token to a typed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Address(#[from] AddressParseError),
    #[error("unknown alias `{0}`")]
    UnknownAlias(String),
    #[error("expected an address value, found `{0}`")]
    NotAnAddress(String),
}

/// Resolves an event to an address value.
pub fn get_address(world: &World, event: &Event) -> Result<Address, ResolveError> {
    match event {
        Event::Atom(token) if token.starts_with("0x") => Ok(token.parse()?),
        Event::Atom(alias) => resolve_alias(world, alias),
        Event::Seq(elements) => match elements.as_slice() {
            [alias, field] if field.as_atom() == Some("Address") => {
                let Some(alias) = alias.as_atom() else {
                    return Err(ResolveError::NotAnAddress(event.to_string()));
                };
                resolve_alias(world, alias)
            }
            _ => Err(ResolveError::NotAnAddress(event.to_string())),
        },
    }
}

fn resolve_alias(world: &World, alias: &str) -> Result<Address, ResolveError> {
    if let Some(address) = world.account(alias) {
        return Ok(address.clone());
    }

    if let Some(record) = world.contract(alias) {
        return Ok(record.address.clone());
    }

    Err(ResolveError::UnknownAlias(alias.to_string()))
}
