use super::{CommandResult, Transition};
use crate::model::{Filter, Model};

pub const COMMAND_WORD: &str = "find";

pub const PROPERTY_USAGE: &str = "find: Finds all properties whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: [-p] KEYWORD [MORE_KEYWORDS]...\n\
Example: find -p sunny villa";

pub const CLIENT_USAGE: &str = "find -c: Finds all clients whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: -c KEYWORD [MORE_KEYWORDS]...\n\
Example: find -c alice benson";

pub fn properties(model: &mut Model, keywords: Vec<String>) -> CommandResult {
    model.update_property_filter(Filter::name_contains(keywords));
    let shown = model.filtered_properties().len();
    CommandResult::new(format!("{} properties listed!", shown))
        .with_transition(Transition::ShowProperties)
}

pub fn clients(model: &mut Model, keywords: Vec<String>) -> CommandResult {
    model.update_client_filter(Filter::name_contains(keywords));
    let shown = model.filtered_clients().len();
    CommandResult::new(format!("{} clients listed!", shown)).with_transition(Transition::ShowClients)
}
