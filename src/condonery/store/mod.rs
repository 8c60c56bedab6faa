//! # Storage Layer
//!
//! The [`Storage`] trait is everything the logic layer needs from persistence:
//! read and write the [`Directory`], read and write the [`UserPrefs`].
//!
//! ## Implementations
//!
//! - [`json::JsonStorage`]: production storage
//!   - the directory lives in one JSON file (`data/condonery.json` by default)
//!   - preferences live in `preferences.json`
//!
//! - [`memory::InMemoryStorage`]: for tests
//!   - no persistence
//!   - can be told to fail writes, to exercise the save-failure path
//!
//! ## Load policy
//!
//! A missing directory file is not an error: `read_directory` returns
//! `Ok(None)` and the caller starts empty. A file that exists but cannot be
//! read back into a valid directory is an error and is surfaced as such.

use crate::error::StorageError;
use crate::model::Directory;
use crate::prefs::UserPrefs;
use std::path::Path;

pub mod json;
pub mod memory;

pub trait Storage {
    /// Where the directory is persisted (virtual for in-memory storage)
    fn directory_file_path(&self) -> &Path;

    /// Load the directory, `None` if nothing has been saved yet
    fn read_directory(&self) -> Result<Option<Directory>, StorageError>;

    /// Persist the whole directory
    fn save_directory(&mut self, directory: &Directory) -> Result<(), StorageError>;

    /// Load preferences, falling back to defaults when none are saved
    fn read_user_prefs(&self) -> Result<UserPrefs, StorageError>;

    fn save_user_prefs(&mut self, prefs: &UserPrefs) -> Result<(), StorageError>;
}
