use crate::error::{CommandError, DirectoryError};
use crate::index::DisplayIndex;
use crate::model::{Client, Model, Name, Property};
use std::collections::BTreeSet;

/// Resolves `index` against the currently displayed properties.
pub fn property_at(model: &Model, index: DisplayIndex) -> Result<Property, CommandError> {
    index
        .select(&model.filtered_properties())
        .cloned()
        .ok_or(CommandError::InvalidPropertyIndex)
}

/// Resolves `index` against the currently displayed clients.
pub fn client_at(model: &Model, index: DisplayIndex) -> Result<Client, CommandError> {
    index
        .select(&model.filtered_clients())
        .cloned()
        .ok_or(CommandError::InvalidClientIndex)
}

/// Every interested client must name an existing client.
pub fn ensure_clients_exist(model: &Model, names: &BTreeSet<Name>) -> Result<(), CommandError> {
    match names.iter().find(|name| !model.has_client(name)) {
        Some(missing) => Err(CommandError::ClientNotFound(missing.to_string())),
        None => Ok(()),
    }
}

pub fn property_conflict(err: DirectoryError) -> CommandError {
    match err {
        DirectoryError::Duplicate(_) => CommandError::DuplicateProperty,
        DirectoryError::NotFound(_) => CommandError::InvalidPropertyIndex,
    }
}

pub fn client_conflict(err: DirectoryError) -> CommandError {
    match err {
        DirectoryError::Duplicate(_) => CommandError::DuplicateClient,
        DirectoryError::NotFound(_) => CommandError::InvalidClientIndex,
    }
}
