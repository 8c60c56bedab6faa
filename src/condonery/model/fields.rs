//! Validated field values shared by properties and clients.
//!
//! Every type here wraps a `String` that has passed its validator; there is no
//! way to build one from an unchecked string. Serde goes through the same
//! validator, so a hand-edited data file cannot smuggle in a bad value.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_field {
    ($ty:ident, $err:ident) => {
        impl $ty {
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if !Self::is_valid(&value) {
                    return Err(ValidationError::$err(value));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Identity field of both properties and clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Alphanumeric words separated by spaces, starting with an alphanumeric.
    pub fn is_valid(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }
}

string_field!(Name, InvalidName);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

string_field!(Address, InvalidAddress);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

string_field!(Tag, InvalidTag);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn is_valid(value: &str) -> bool {
        value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
    }
}

string_field!(Phone, InvalidPhone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

const EMAIL_LOCAL_SPECIALS: &[char] = &['+', '_', '.', '-'];

impl Email {
    pub fn is_valid(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        Self::is_valid_local(local) && Self::is_valid_domain(domain)
    }

    fn is_valid_local(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || EMAIL_LOCAL_SPECIALS.contains(&c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        let well_formed = labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

        well_formed && labels.last().is_some_and(|tld| tld.len() >= 2)
    }
}

string_field!(Email, InvalidEmail);
