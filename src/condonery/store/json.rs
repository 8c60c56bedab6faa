use super::Storage;
use crate::error::{StorageError, ValidationError};
use crate::model::{Address, Client, Directory, Email, Name, Phone, Property, Tag};
use crate::prefs::UserPrefs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON file storage for the directory and the preferences.
pub struct JsonStorage {
    directory_path: PathBuf,
    prefs_path: PathBuf,
}

impl JsonStorage {
    pub fn new(directory_path: impl Into<PathBuf>, prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            directory_path: directory_path.into(),
            prefs_path: prefs_path.into(),
        }
    }

    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    fn ensure_parent(path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn directory_file_path(&self) -> &Path {
        &self.directory_path
    }

    fn read_directory(&self) -> Result<Option<Directory>, StorageError> {
        if !self.directory_path.exists() {
            info!(path = %self.directory_path.display(), "directory file not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.directory_path)?;
        let stored: JsonDirectory = serde_json::from_str(&content)?;
        let directory = stored.into_model()?;
        debug!(
            properties = directory.properties().len(),
            clients = directory.clients().len(),
            "directory loaded"
        );
        Ok(Some(directory))
    }

    fn save_directory(&mut self, directory: &Directory) -> Result<(), StorageError> {
        Self::ensure_parent(&self.directory_path)?;

        let content = serde_json::to_string_pretty(&JsonDirectory::from_model(directory))?;

        // Atomic Write
        let file_name = self
            .directory_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "directory".to_string());
        let tmp_path = self.directory_path.with_file_name(format!(".{}.tmp", file_name));
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.directory_path)?;

        debug!(path = %self.directory_path.display(), "directory saved");
        Ok(())
    }

    fn read_user_prefs(&self) -> Result<UserPrefs, StorageError> {
        UserPrefs::load(&self.prefs_path)
    }

    fn save_user_prefs(&mut self, prefs: &UserPrefs) -> Result<(), StorageError> {
        prefs.save(&self.prefs_path)
    }
}

// --- On-disk records ---
//
// Fields are optional on the way in so that a record with a missing field is
// reported as such, rather than as a generic parse failure.

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonDirectory {
    #[serde(default)]
    properties: Vec<JsonProperty>,
    #[serde(default)]
    clients: Vec<JsonClient>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonProperty {
    name: Option<String>,
    address: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    interested_clients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonClient {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

fn required(value: Option<String>, entity: &str, field: &str) -> Result<String, StorageError> {
    value.ok_or_else(|| StorageError::MissingField(format!("{}'s {} field is missing!", entity, field)))
}

fn illegal(err: ValidationError) -> StorageError {
    StorageError::IllegalValue(err.to_string())
}

fn tags(raw: Vec<String>) -> Result<Vec<Tag>, StorageError> {
    raw.into_iter().map(|t| Tag::new(t).map_err(illegal)).collect()
}

impl JsonDirectory {
    fn from_model(directory: &Directory) -> Self {
        Self {
            properties: directory.properties().iter().map(JsonProperty::from_model).collect(),
            clients: directory.clients().iter().map(JsonClient::from_model).collect(),
        }
    }

    fn into_model(self) -> Result<Directory, StorageError> {
        let clients = self
            .clients
            .into_iter()
            .map(JsonClient::into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let properties = self
            .properties
            .into_iter()
            .map(JsonProperty::into_model)
            .collect::<Result<Vec<_>, _>>()?;

        for property in &properties {
            for interested in property.interested_clients() {
                if !clients.iter().any(|c| c.name() == interested) {
                    return Err(StorageError::IllegalValue(format!(
                        "property {} references unknown client {}",
                        property.name(),
                        interested
                    )));
                }
            }
        }

        Directory::from_entries(properties, clients)
            .map_err(|e| StorageError::IllegalValue(e.to_string()))
    }
}

impl JsonProperty {
    fn from_model(property: &Property) -> Self {
        Self {
            name: Some(property.name().to_string()),
            address: Some(property.address().to_string()),
            tags: property.tags().iter().map(|t| t.to_string()).collect(),
            interested_clients: property
                .interested_clients()
                .iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }

    fn into_model(self) -> Result<Property, StorageError> {
        let name = Name::new(required(self.name, "Property", "Name")?).map_err(illegal)?;
        let address = Address::new(required(self.address, "Property", "Address")?).map_err(illegal)?;
        let interested = self
            .interested_clients
            .into_iter()
            .map(|n| Name::new(n).map_err(illegal))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Property::new(name, address, tags(self.tags)?, interested))
    }
}

impl JsonClient {
    fn from_model(client: &Client) -> Self {
        Self {
            name: Some(client.name().to_string()),
            phone: Some(client.phone().to_string()),
            email: Some(client.email().to_string()),
            address: Some(client.address().to_string()),
            tags: client.tags().iter().map(|t| t.to_string()).collect(),
        }
    }

    fn into_model(self) -> Result<Client, StorageError> {
        let name = Name::new(required(self.name, "Client", "Name")?).map_err(illegal)?;
        let phone = Phone::new(required(self.phone, "Client", "Phone")?).map_err(illegal)?;
        let email = Email::new(required(self.email, "Client", "Email")?).map_err(illegal)?;
        let address = Address::new(required(self.address, "Client", "Address")?).map_err(illegal)?;
        Ok(Client::new(name, phone, email, address, tags(self.tags)?))
    }
}
