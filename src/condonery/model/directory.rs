use super::client::Client;
use super::fields::Name;
use super::property::Property;
use super::unique_list::UniqueList;
use crate::error::DirectoryError;
use tracing::debug;

/// Everything that gets persisted: the property and client directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    properties: UniqueList<Property>,
    clients: UniqueList<Client>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from stored entries, rejecting duplicate names.
    pub fn from_entries(
        properties: Vec<Property>,
        clients: Vec<Client>,
    ) -> Result<Self, DirectoryError> {
        let mut directory = Self::new();
        directory.properties.set_all(properties)?;
        directory.clients.set_all(clients)?;
        Ok(directory)
    }

    pub fn properties(&self) -> &UniqueList<Property> {
        &self.properties
    }

    pub fn clients(&self) -> &UniqueList<Client> {
        &self.clients
    }

    pub fn add_property(&mut self, property: Property) -> Result<(), DirectoryError> {
        self.properties.add(property)
    }

    pub fn remove_property(&mut self, name: &Name) -> Result<Property, DirectoryError> {
        self.properties.remove(name)
    }

    pub fn replace_property(
        &mut self,
        target: &Name,
        edited: Property,
    ) -> Result<(), DirectoryError> {
        self.properties.replace(target, edited)
    }

    pub fn add_client(&mut self, client: Client) -> Result<(), DirectoryError> {
        self.clients.add(client)
    }

    /// Removes a client and drops it from every property that listed it as
    /// interested.
    pub fn remove_client(&mut self, name: &Name) -> Result<Client, DirectoryError> {
        let removed = self.clients.remove(name)?;
        self.relink_client(name, None);
        Ok(removed)
    }

    /// Replaces a client. A rename is carried over to the properties that
    /// reference the old name.
    pub fn replace_client(&mut self, target: &Name, edited: Client) -> Result<(), DirectoryError> {
        let new_name = edited.name().clone();
        self.clients.replace(target, edited)?;
        if &new_name != target {
            self.relink_client(target, Some(&new_name));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.properties.clear();
        self.clients.clear();
    }

    fn relink_client(&mut self, old: &Name, new: Option<&Name>) {
        let affected: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.is_client_interested(old))
            .cloned()
            .collect();

        for property in affected {
            let relinked = property.with_client_relinked(old, new);
            // Property names are unchanged, so the replace cannot collide.
            if self.properties.replace(property.name(), relinked).is_ok() {
                debug!(
                    property = %property.name(),
                    client = %old,
                    "updated interested-client reference"
                );
            }
        }
    }
}
