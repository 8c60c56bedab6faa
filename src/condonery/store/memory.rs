use super::Storage;
use crate::error::StorageError;
use crate::model::Directory;
use crate::prefs::UserPrefs;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
pub struct InMemoryStorage {
    directory: Option<Directory>,
    prefs: Option<UserPrefs>,
    path: PathBuf,
    simulate_write_error: bool,
    saves: usize,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self {
            directory: None,
            prefs: None,
            path: PathBuf::from("memory://condonery.json"),
            simulate_write_error: false,
            saves: 0,
        }
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: Directory) -> Self {
        Self {
            directory: Some(directory),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// The last directory successfully saved.
    pub fn saved_directory(&self) -> Option<&Directory> {
        self.directory.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.simulate_write_error {
            return Err(StorageError::Io(io::Error::other("simulated write error")));
        }
        Ok(())
    }
}

impl Storage for InMemoryStorage {
    fn directory_file_path(&self) -> &Path {
        &self.path
    }

    fn read_directory(&self) -> Result<Option<Directory>, StorageError> {
        Ok(self.directory.clone())
    }

    fn save_directory(&mut self, directory: &Directory) -> Result<(), StorageError> {
        self.check_writable()?;
        self.directory = Some(directory.clone());
        self.saves += 1;
        Ok(())
    }

    fn read_user_prefs(&self) -> Result<UserPrefs, StorageError> {
        Ok(self.prefs.clone().unwrap_or_default())
    }

    fn save_user_prefs(&mut self, prefs: &UserPrefs) -> Result<(), StorageError> {
        self.check_writable()?;
        self.prefs = Some(prefs.clone());
        Ok(())
    }
}
