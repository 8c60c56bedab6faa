use super::fields::{Address, Email, Name, Phone, Tag};
use super::unique_list::Identity;
use std::collections::BTreeSet;
use std::fmt;

/// A prospective buyer or tenant. Identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Client {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Identity for Client {
    fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice(phone: &str) -> Client {
        Client::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123 Jurong West Ave 6").unwrap(),
            [Tag::new("buyer").unwrap()],
        )
    }

    #[test]
    fn identity_is_name_only() {
        let a = alice("94351253");
        let b = alice("98765432");
        assert!(a.is_same_identity(&b));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn display_lists_contact_fields() {
        assert_eq!(
            alice("94351253").to_string(),
            "Alice Pauline; Phone: 94351253; Email: alice@example.com; \
             Address: 123 Jurong West Ave 6; Tags: [buyer]"
        );
    }
}
