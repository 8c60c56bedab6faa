use super::{CommandResult, Transition};
use crate::model::{Filter, Model};

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all properties, or all clients with -c.\n\
Example: list\n\
Example: list -c";

pub const MESSAGE_PROPERTIES: &str = "Listed all properties";
pub const MESSAGE_CLIENTS: &str = "Listed all clients";

pub fn properties(model: &mut Model) -> CommandResult {
    model.update_property_filter(Filter::All);
    CommandResult::new(MESSAGE_PROPERTIES).with_transition(Transition::ShowProperties)
}

pub fn clients(model: &mut Model) -> CommandResult {
    model.update_client_filter(Filter::All);
    CommandResult::new(MESSAGE_CLIENTS).with_transition(Transition::ShowClients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;

    #[test]
    fn resets_a_narrowed_view() {
        let mut model = typical_model();
        model.update_property_filter(Filter::name_contains(["loft"]));
        assert_eq!(model.filtered_properties().len(), 1);

        let result = properties(&mut model);

        assert_eq!(result.feedback, MESSAGE_PROPERTIES);
        assert_eq!(model.filtered_properties().len(), 3);
    }

    #[test]
    fn listing_clients_leaves_property_view_alone() {
        let mut model = typical_model();
        model.update_property_filter(Filter::name_contains(["loft"]));
        model.update_client_filter(Filter::name_contains(["benson"]));

        let result = clients(&mut model);

        assert_eq!(result.transition, Some(Transition::ShowClients));
        assert_eq!(model.filtered_clients().len(), 2);
        assert_eq!(model.filtered_properties().len(), 1);
    }
}
