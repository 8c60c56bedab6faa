//! # Logic Facade
//!
//! [`Logic`] is the single entry point a front end talks to. It takes raw
//! command text and hands back a [`CommandResult`]:
//!
//! 1. parse the text into a [`crate::commands::Command`]
//! 2. execute it against the [`Model`]
//! 3. persist the directory through the [`Storage`] backend
//!
//! ## Generic Over Storage
//!
//! `Logic<S: Storage>` is generic over the backend:
//! - Production: `Logic<JsonStorage>`
//! - Testing: `Logic<InMemoryStorage>`
//!
//! ## Save failures
//!
//! The directory is saved after every command that parsed and executed
//! successfully. If that save fails the command's change stays in memory and
//! the caller gets [`CommandError::FileOps`]; nothing is rolled back.

use crate::commands::CommandResult;
use crate::error::{CommandError, Result};
use crate::model::{Client, Directory, Model, Property};
use crate::parser;
use crate::prefs::GuiSettings;
use crate::store::Storage;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Logic<S: Storage> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult> {
        info!(command = command_text, "executing");

        let command = parser::parse(command_text)?;
        let result = command.execute(&mut self.model)?;

        if let Err(err) = self.storage.save_directory(self.model.directory()) {
            warn!(error = %err, "saving directory failed");
            return Err(CommandError::FileOps(err).into());
        }
        debug!(
            path = %self.storage.directory_file_path().display(),
            "directory saved"
        );
        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn directory(&self) -> &Directory {
        self.model.directory()
    }

    pub fn filtered_properties(&self) -> Vec<&Property> {
        self.model.filtered_properties()
    }

    pub fn filtered_clients(&self) -> Vec<&Client> {
        self.model.filtered_clients()
    }

    /// The file the directory is written to, which may differ from the
    /// preferences' `directoryFilePath` when a front end overrides it.
    pub fn directory_file_path(&self) -> &Path {
        self.storage.directory_file_path()
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.model.set_gui_settings(settings);
    }

    /// Writes the current preferences back, typically on shutdown.
    pub fn save_user_prefs(&mut self) -> Result<()> {
        self.storage.save_user_prefs(self.model.user_prefs())?;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
