use super::{CommandResult, Transition};
use crate::model::Model;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Removes every property and client from the directory.\n\
Example: clear";

pub const MESSAGE_SUCCESS: &str = "Condonery has been cleared!";

pub fn run(model: &mut Model) -> CommandResult {
    model.clear();
    CommandResult::new(MESSAGE_SUCCESS).with_transition(Transition::ShowProperties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;
    use crate::model::Filter;

    #[test]
    fn empties_directory_and_views() {
        let mut model = typical_model();
        model.update_client_filter(Filter::name_contains(["alice"]));

        let result = run(&mut model);

        assert_eq!(result.feedback, MESSAGE_SUCCESS);
        assert!(model.directory().properties().is_empty());
        assert!(model.directory().clients().is_empty());
        assert_eq!(model.client_filter(), &Filter::All);
    }

    #[test]
    fn clearing_an_empty_directory_succeeds() {
        let mut model = crate::model::Model::default();
        assert_eq!(run(&mut model).feedback, MESSAGE_SUCCESS);
    }
}
