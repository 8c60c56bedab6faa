use super::fields::{Address, Name, Tag};
use super::unique_list::Identity;
use std::collections::BTreeSet;
use std::fmt;

/// A listing in the directory.
///
/// Immutable once built: editing a property means building a replacement and
/// swapping it in. Interested clients are held by name only and resolved
/// against the client directory when needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    name: Name,
    address: Address,
    tags: BTreeSet<Tag>,
    interested_clients: BTreeSet<Name>,
}

impl Property {
    pub fn new(
        name: Name,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
        interested_clients: impl IntoIterator<Item = Name>,
    ) -> Self {
        Self {
            name,
            address,
            tags: tags.into_iter().collect(),
            interested_clients: interested_clients.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn interested_clients(&self) -> &BTreeSet<Name> {
        &self.interested_clients
    }

    pub fn is_client_interested(&self, client: &Name) -> bool {
        self.interested_clients.contains(client)
    }

    /// Returns a copy of this property with `old` replaced by `new` in the
    /// interested-client set, or dropped when `new` is `None`.
    pub fn with_client_relinked(&self, old: &Name, new: Option<&Name>) -> Self {
        let mut interested_clients = self.interested_clients.clone();
        if interested_clients.remove(old) {
            if let Some(new) = new {
                interested_clients.insert(new.clone());
            }
        }
        Self {
            interested_clients,
            ..self.clone()
        }
    }
}

impl Identity for Property {
    fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Address: {}", self.name, self.address)?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        if !self.interested_clients.is_empty() {
            f.write_str("; Interested clients: ")?;
            for client in &self.interested_clients {
                write!(f, "[{}]", client)?;
            }
        }
        Ok(())
    }
}
