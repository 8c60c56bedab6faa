//! # Model
//!
//! The in-memory state the commands operate on:
//!
//! - [`Directory`]: the authoritative property and client lists
//! - [`UserPrefs`]: window geometry and the directory file location
//! - one [`Filter`] per list, deciding what is currently displayed
//!
//! The displayed lists are not stored anywhere. Each call to
//! [`Model::filtered_properties`] or [`Model::filtered_clients`] walks the
//! directory with the active filter, so the view can never go stale.

pub mod client;
pub mod directory;
pub mod fields;
pub mod predicate;
pub mod property;
pub mod unique_list;

pub use client::Client;
pub use directory::Directory;
pub use fields::{Address, Email, Name, Phone, Tag};
pub use predicate::Filter;
pub use property::Property;
pub use unique_list::{Identity, UniqueList};

use crate::error::DirectoryError;
use crate::prefs::{GuiSettings, UserPrefs};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    directory: Directory,
    user_prefs: UserPrefs,
    property_filter: Filter,
    client_filter: Filter,
}

impl Model {
    pub fn new(directory: Directory, user_prefs: UserPrefs) -> Self {
        Self {
            directory,
            user_prefs,
            property_filter: Filter::All,
            client_filter: Filter::All,
        }
    }

    // --- preferences ---

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.user_prefs.gui_settings = settings;
    }

    pub fn directory_file_path(&self) -> &Path {
        &self.user_prefs.directory_file_path
    }

    pub fn set_directory_file_path(&mut self, path: PathBuf) {
        self.user_prefs.directory_file_path = path;
    }

    // --- directory ---

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn set_directory(&mut self, directory: Directory) {
        self.directory = directory;
    }

    pub fn has_property(&self, name: &Name) -> bool {
        self.directory.properties().contains(name)
    }

    pub fn add_property(&mut self, property: Property) -> Result<(), DirectoryError> {
        self.directory.add_property(property)?;
        self.property_filter = Filter::All;
        Ok(())
    }

    pub fn delete_property(&mut self, name: &Name) -> Result<Property, DirectoryError> {
        self.directory.remove_property(name)
    }

    pub fn set_property(&mut self, target: &Name, edited: Property) -> Result<(), DirectoryError> {
        self.directory.replace_property(target, edited)?;
        self.property_filter = Filter::All;
        Ok(())
    }

    pub fn has_client(&self, name: &Name) -> bool {
        self.directory.clients().contains(name)
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), DirectoryError> {
        self.directory.add_client(client)?;
        self.client_filter = Filter::All;
        Ok(())
    }

    pub fn delete_client(&mut self, name: &Name) -> Result<Client, DirectoryError> {
        self.directory.remove_client(name)
    }

    pub fn set_client(&mut self, target: &Name, edited: Client) -> Result<(), DirectoryError> {
        self.directory.replace_client(target, edited)?;
        self.client_filter = Filter::All;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.directory.clear();
        self.property_filter = Filter::All;
        self.client_filter = Filter::All;
    }

    // --- displayed views ---

    pub fn property_filter(&self) -> &Filter {
        &self.property_filter
    }

    pub fn client_filter(&self) -> &Filter {
        &self.client_filter
    }

    pub fn update_property_filter(&mut self, filter: Filter) {
        self.property_filter = filter;
    }

    pub fn update_client_filter(&mut self, filter: Filter) {
        self.client_filter = filter;
    }

    pub fn filtered_properties(&self) -> Vec<&Property> {
        self.directory
            .properties()
            .filtered(|p| self.property_filter.matches(p.name()))
    }

    pub fn filtered_clients(&self) -> Vec<&Client> {
        self.directory
            .clients()
            .filtered(|c| self.client_filter.matches(c.name()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn property(name: &str, address: &str, tags: &[&str]) -> Property {
        Property::new(
            Name::new(name).unwrap(),
            Address::new(address).unwrap(),
            tags.iter().map(|t| Tag::new(*t).unwrap()),
            [],
        )
    }

    pub fn property_with_clients(name: &str, clients: &[&str]) -> Property {
        Property::new(
            Name::new(name).unwrap(),
            Address::new("1 Fixture Lane").unwrap(),
            [],
            clients.iter().map(|c| Name::new(*c).unwrap()),
        )
    }

    pub fn client(name: &str) -> Client {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        Client::new(
            Name::new(name).unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new(email).unwrap(),
            Address::new("311 Clementi Ave 2").unwrap(),
            [],
        )
    }

    /// Three properties and two clients, with Alice interested in Sunny Villa.
    pub fn typical_directory() -> Directory {
        let mut directory = Directory::new();
        directory.add_client(client("Alice Pauline")).unwrap();
        directory.add_client(client("Benson Meier")).unwrap();
        directory
            .add_property(Property::new(
                Name::new("Sunny Villa").unwrap(),
                Address::new("123 Orchard Rd").unwrap(),
                [Tag::new("luxury").unwrap()],
                [Name::new("Alice Pauline").unwrap()],
            ))
            .unwrap();
        directory
            .add_property(property("Pinnacle Duxton", "1 Cantonment Rd", &["hdb"]))
            .unwrap();
        directory
            .add_property(property("Sunny Loft", "8 Marine Parade", &[]))
            .unwrap();
        directory
    }

    pub fn typical_model() -> Model {
        Model::new(typical_directory(), UserPrefs::default())
    }
}
