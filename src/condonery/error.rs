use thiserror::Error;

/// A raw string was rejected by one of the field value types.
///
/// The message is the constraint the value broke, which is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Names should only contain alphanumeric characters and spaces, and it should not be blank"
    )]
    InvalidName(String),

    #[error("Addresses can take any values, and it should not be blank")]
    InvalidAddress(String),

    #[error("Tags names should be alphanumeric")]
    InvalidTag(String),

    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    InvalidPhone(String),

    #[error(
        "Emails should be of the format local-part@domain, where the domain has at least one period \
         and ends with a label of at least 2 characters"
    )]
    InvalidEmail(String),
}

/// Malformed user input. Raised before anything touches the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format! \n{0}")]
    InvalidFormat(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Collection-level failures from a [`crate::model::unique_list::UniqueList`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("An entry named {0} already exists")]
    Duplicate(String),

    #[error("No entry named {0} exists")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    MissingField(String),

    #[error("Illegal value in data file: {0}")]
    IllegalValue(String),
}

/// A well-formed command that could not be carried out against the model.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("This property already exists in the directory")]
    DuplicateProperty,

    #[error("This client already exists in the directory")]
    DuplicateClient,

    #[error("The property index provided is invalid")]
    InvalidPropertyIndex,

    #[error("The client index provided is invalid")]
    InvalidClientIndex,

    #[error("No client named {0} exists in the directory")]
    ClientNotFound(String),

    #[error("Could not save data to file: {0}")]
    FileOps(#[source] StorageError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;
