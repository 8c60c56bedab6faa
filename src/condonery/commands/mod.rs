//! # Command Layer
//!
//! One [`Command`] variant per user action, each carrying its already-parsed
//! and validated payload. [`Command::execute`] is the only way a command
//! touches the [`Model`]; the per-command logic lives in the submodules.
//!
//! Commands know nothing about persistence. Saving after a successful command
//! is the job of [`crate::logic::Logic`].

use crate::error::CommandError;
use crate::index::DisplayIndex;
use crate::model::{Client, Model, Property};
use once_cell::sync::Lazy;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod list;

pub use edit::{EditClientDescriptor, EditPropertyDescriptor};

pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";
pub const MESSAGE_SHOWING_HELP: &str = "Opened help window.";
pub const MESSAGE_EXIT: &str = "Exiting Condonery as requested ...";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Saves and exits the program.\nExample: exit";

/// Full usage text, one block per command.
pub static HELP_TEXT: Lazy<String> = Lazy::new(|| {
    [
        add::PROPERTY_USAGE,
        add::CLIENT_USAGE,
        edit::PROPERTY_USAGE,
        edit::CLIENT_USAGE,
        delete::PROPERTY_USAGE,
        delete::CLIENT_USAGE,
        list::USAGE,
        find::PROPERTY_USAGE,
        find::CLIENT_USAGE,
        clear::USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
});

/// What the presentation layer should switch to after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ShowHelp,
    Exit,
    ShowProperties,
    ShowClients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub transition: Option<Transition>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            transition: None,
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn is_exit(&self) -> bool {
        self.transition == Some(Transition::Exit)
    }

    pub fn is_show_help(&self) -> bool {
        self.transition == Some(Transition::ShowHelp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProperty(Property),
    AddClient(Client),
    EditProperty {
        index: DisplayIndex,
        edit: EditPropertyDescriptor,
    },
    EditClient {
        index: DisplayIndex,
        edit: EditClientDescriptor,
    },
    DeleteProperty(DisplayIndex),
    DeleteClient(DisplayIndex),
    ListProperties,
    ListClients,
    FindProperties(Vec<String>),
    FindClients(Vec<String>),
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn execute(self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::AddProperty(property) => add::property(model, property),
            Command::AddClient(client) => add::client(model, client),
            Command::EditProperty { index, edit } => edit::property(model, index, &edit),
            Command::EditClient { index, edit } => edit::client(model, index, &edit),
            Command::DeleteProperty(index) => delete::property(model, index),
            Command::DeleteClient(index) => delete::client(model, index),
            Command::ListProperties => Ok(list::properties(model)),
            Command::ListClients => Ok(list::clients(model)),
            Command::FindProperties(keywords) => Ok(find::properties(model, keywords)),
            Command::FindClients(keywords) => Ok(find::clients(model, keywords)),
            Command::Clear => Ok(clear::run(model)),
            Command::Help => {
                Ok(CommandResult::new(MESSAGE_SHOWING_HELP).with_transition(Transition::ShowHelp))
            }
            Command::Exit => Ok(CommandResult::new(MESSAGE_EXIT).with_transition(Transition::Exit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;

    #[test]
    fn help_requests_help_view() {
        let mut model = typical_model();
        let result = Command::Help.execute(&mut model).unwrap();
        assert_eq!(result.feedback, MESSAGE_SHOWING_HELP);
        assert!(result.is_show_help());
        assert!(!result.is_exit());
    }

    #[test]
    fn exit_requests_exit() {
        let mut model = typical_model();
        let result = Command::Exit.execute(&mut model).unwrap();
        assert_eq!(result.feedback, MESSAGE_EXIT);
        assert!(result.is_exit());
    }

    #[test]
    fn help_and_exit_leave_model_untouched() {
        let mut model = typical_model();
        let before = model.clone();
        Command::Help.execute(&mut model).unwrap();
        Command::Exit.execute(&mut model).unwrap();
        assert_eq!(model, before);
    }

    #[test]
    fn help_text_covers_every_command() {
        for word in ["add", "edit", "delete", "list", "find", "clear", "help", "exit"] {
            assert!(
                HELP_TEXT.contains(&format!("{}:", word)),
                "missing usage for {}",
                word
            );
        }
    }
}
