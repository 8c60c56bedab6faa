use super::helpers::{client_conflict, ensure_clients_exist, property_conflict};
use super::{CommandResult, Transition};
use crate::error::CommandError;
use crate::model::{Client, Model, Property};

pub const COMMAND_WORD: &str = "add";

pub const PROPERTY_USAGE: &str = "add: Adds a property to the directory. \
Parameters: [-p] n/NAME a/ADDRESS [t/TAG]... [ic/INTERESTED CLIENT]...\n\
Example: add -p n/Sunny Villa a/123 Orchard Rd t/luxury ic/Alice Pauline";

pub const CLIENT_USAGE: &str = "add -c: Adds a client to the directory. \
Parameters: -c n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add -c n/Alice Pauline p/94351253 e/alice@example.com a/123 Jurong West Ave 6 t/buyer";

pub fn property(model: &mut Model, property: Property) -> Result<CommandResult, CommandError> {
    if model.has_property(property.name()) {
        return Err(CommandError::DuplicateProperty);
    }
    ensure_clients_exist(model, property.interested_clients())?;

    let feedback = format!("New property added: {}", property);
    model.add_property(property).map_err(property_conflict)?;
    Ok(CommandResult::new(feedback).with_transition(Transition::ShowProperties))
}

pub fn client(model: &mut Model, client: Client) -> Result<CommandResult, CommandError> {
    if model.has_client(client.name()) {
        return Err(CommandError::DuplicateClient);
    }

    let feedback = format!("New client added: {}", client);
    model.add_client(client).map_err(client_conflict)?;
    Ok(CommandResult::new(feedback).with_transition(Transition::ShowClients))
}
