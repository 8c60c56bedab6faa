use super::helpers::{client_at, client_conflict, property_at, property_conflict};
use super::{CommandResult, Transition};
use crate::error::CommandError;
use crate::index::DisplayIndex;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const PROPERTY_USAGE: &str = "delete: Deletes the property identified by the index number \
used in the displayed property list.\n\
Parameters: [-p] INDEX (must be a positive integer)\n\
Example: delete -p 1";

pub const CLIENT_USAGE: &str = "delete -c: Deletes the client identified by the index number \
used in the displayed client list. The client is also removed from every property it was \
interested in.\n\
Parameters: -c INDEX (must be a positive integer)\n\
Example: delete -c 1";

pub fn property(model: &mut Model, index: DisplayIndex) -> Result<CommandResult, CommandError> {
    let target = property_at(model, index)?;
    let removed = model
        .delete_property(target.name())
        .map_err(property_conflict)?;
    Ok(CommandResult::new(format!("Deleted Property: {}", removed))
        .with_transition(Transition::ShowProperties))
}

pub fn client(model: &mut Model, index: DisplayIndex) -> Result<CommandResult, CommandError> {
    let target = client_at(model, index)?;
    let removed = model.delete_client(target.name()).map_err(client_conflict)?;
    Ok(CommandResult::new(format!("Deleted Client: {}", removed))
        .with_transition(Transition::ShowClients))
}
