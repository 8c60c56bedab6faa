use super::helpers::{client_at, client_conflict, ensure_clients_exist, property_at, property_conflict};
use super::{CommandResult, Transition};
use crate::error::CommandError;
use crate::index::DisplayIndex;
use crate::model::{Address, Client, Email, Identity, Model, Name, Phone, Property, Tag};
use std::collections::BTreeSet;
use tracing::debug;

pub const COMMAND_WORD: &str = "edit";

pub const PROPERTY_USAGE: &str = "edit: Edits the property identified by the index number used in \
the displayed property list. Existing values will be overwritten by the input values.\n\
Parameters: [-p] INDEX (must be a positive integer) [n/NAME] [a/ADDRESS] [t/TAG]... \
[ic/INTERESTED CLIENT]...\n\
Example: edit -p 1 a/456 Other Rd t/";

pub const CLIENT_USAGE: &str = "edit -c: Edits the client identified by the index number used in \
the displayed client list. Existing values will be overwritten by the input values.\n\
Parameters: -c INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit -c 1 p/91234567 e/alice@example.com";

/// Field overrides for a property. Unset fields keep their current value; a
/// set but empty collection clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPropertyDescriptor {
    pub name: Option<Name>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
    pub interested_clients: Option<BTreeSet<Name>>,
}

impl EditPropertyDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.address.is_some()
            || self.tags.is_some()
            || self.interested_clients.is_some()
    }

    pub fn apply(&self, current: &Property) -> Property {
        Property::new(
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| current.address().clone()),
            self.tags.clone().unwrap_or_else(|| current.tags().clone()),
            self.interested_clients
                .clone()
                .unwrap_or_else(|| current.interested_clients().clone()),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditClientDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditClientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn apply(&self, current: &Client) -> Client {
        Client::new(
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.phone.clone().unwrap_or_else(|| current.phone().clone()),
            self.email.clone().unwrap_or_else(|| current.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| current.address().clone()),
            self.tags.clone().unwrap_or_else(|| current.tags().clone()),
        )
    }
}

pub fn property(
    model: &mut Model,
    index: DisplayIndex,
    edit: &EditPropertyDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = property_at(model, index)?;
    let edited = edit.apply(&target);

    if !target.is_same_identity(&edited) && model.has_property(edited.name()) {
        return Err(CommandError::DuplicateProperty);
    }
    ensure_clients_exist(model, edited.interested_clients())?;

    let feedback = format!("Edited Property: {}", edited);
    model
        .set_property(target.name(), edited)
        .map_err(property_conflict)?;
    Ok(CommandResult::new(feedback).with_transition(Transition::ShowProperties))
}

pub fn client(
    model: &mut Model,
    index: DisplayIndex,
    edit: &EditClientDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = client_at(model, index)?;
    let edited = edit.apply(&target);

    if !target.is_same_identity(&edited) && model.has_client(edited.name()) {
        return Err(CommandError::DuplicateClient);
    }
    if !target.is_same_identity(&edited) {
        debug!(from = %target.name(), to = %edited.name(), "renaming client");
    }

    let feedback = format!("Edited Client: {}", edited);
    model
        .set_client(target.name(), edited)
        .map_err(client_conflict)?;
    Ok(CommandResult::new(feedback).with_transition(Transition::ShowClients))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;
    use crate::model::Filter;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn unset_fields_are_kept() {
        let mut model = typical_model();
        let edit = EditPropertyDescriptor {
            address: Some(Address::new("456 Other Rd").unwrap()),
            ..Default::default()
        };

        let result = property(&mut model, idx(1), &edit).unwrap();

        assert_eq!(
            result.feedback,
            "Edited Property: Sunny Villa; Address: 456 Other Rd; Tags: [luxury]; \
             Interested clients: [Alice Pauline]"
        );
        let villa = model.directory().properties().get(&name("Sunny Villa")).unwrap();
        assert_eq!(villa.address().as_str(), "456 Other Rd");
        assert_eq!(villa.tags().len(), 1);
    }

    #[test]
    fn empty_tag_set_clears_tags() {
        let mut model = typical_model();
        let edit = EditPropertyDescriptor {
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };
        property(&mut model, idx(1), &edit).unwrap();
        let villa = model.directory().properties().get(&name("Sunny Villa")).unwrap();
        assert!(villa.tags().is_empty());
    }

    #[test]
    fn empty_client_set_clears_interested_clients() {
        let mut model = typical_model();
        let edit = EditPropertyDescriptor {
            interested_clients: Some(BTreeSet::new()),
            ..Default::default()
        };

        let result = property(&mut model, idx(1), &edit).unwrap();

        assert_eq!(
            result.feedback,
            "Edited Property: Sunny Villa; Address: 123 Orchard Rd; Tags: [luxury]"
        );
        let villa = model.directory().properties().get(&name("Sunny Villa")).unwrap();
        assert!(villa.interested_clients().is_empty());
        assert!(model.has_client(&name("Alice Pauline")));
    }

    #[test]
    fn rename_keeps_position() {
        let mut model = typical_model();
        let edit = EditPropertyDescriptor {
            name: Some(name("Rainy Villa")),
            ..Default::default()
        };
        property(&mut model, idx(1), &edit).unwrap();
        assert_eq!(model.filtered_properties()[0].name().as_str(), "Rainy Villa");
        assert!(!model.has_property(&name("Sunny Villa")));
    }

    #[test]
    fn rename_onto_other_property_is_duplicate() {
        let mut model = typical_model();
        let before = model.clone();
        let edit = EditPropertyDescriptor {
            name: Some(name("Sunny Loft")),
            ..Default::default()
        };
        let err = property(&mut model, idx(1), &edit).unwrap_err();
        assert!(matches!(err, CommandError::DuplicateProperty));
        assert_eq!(model, before);
    }

    #[test]
    fn index_is_resolved_against_filtered_view() {
        let mut model = typical_model();
        model.update_property_filter(Filter::name_contains(["loft"]));
        let edit = EditPropertyDescriptor {
            tags: Some([Tag::new("renovated").unwrap()].into_iter().collect()),
            ..Default::default()
        };

        property(&mut model, idx(1), &edit).unwrap();

        let loft = model.directory().properties().get(&name("Sunny Loft")).unwrap();
        assert!(loft.tags().contains(&Tag::new("renovated").unwrap()));
        // edit resets the view
        assert_eq!(model.filtered_properties().len(), 3);
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let mut model = typical_model();
        model.update_property_filter(Filter::name_contains(["loft"]));
        let edit = EditPropertyDescriptor {
            address: Some(Address::new("1 Nowhere").unwrap()),
            ..Default::default()
        };
        let err = property(&mut model, idx(2), &edit).unwrap_err();
        assert_eq!(err.to_string(), "The property index provided is invalid");
    }

    #[test]
    fn unknown_interested_client_is_rejected() {
        let mut model = typical_model();
        let edit = EditPropertyDescriptor {
            interested_clients: Some([name("Nobody")].into_iter().collect()),
            ..Default::default()
        };
        let err = property(&mut model, idx(2), &edit).unwrap_err();
        assert!(matches!(err, CommandError::ClientNotFound(_)));
    }

    #[test]
    fn client_rename_updates_property_references() {
        let mut model = typical_model();
        let edit = EditClientDescriptor {
            name: Some(name("Alice Tan")),
            ..Default::default()
        };

        let result = client(&mut model, idx(1), &edit).unwrap();

        assert!(result.feedback.starts_with("Edited Client: Alice Tan;"));
        let villa = model.directory().properties().get(&name("Sunny Villa")).unwrap();
        assert!(villa.is_client_interested(&name("Alice Tan")));
        assert!(!villa.is_client_interested(&name("Alice Pauline")));
    }

    #[test]
    fn client_rename_collision_is_duplicate() {
        let mut model = typical_model();
        let edit = EditClientDescriptor {
            name: Some(name("Benson Meier")),
            ..Default::default()
        };
        let err = client(&mut model, idx(1), &edit).unwrap_err();
        assert_eq!(err.to_string(), "This client already exists in the directory");
    }

    #[test]
    fn descriptor_reports_edited_fields() {
        assert!(!EditPropertyDescriptor::default().is_any_field_edited());
        assert!(!EditClientDescriptor::default().is_any_field_edited());
        let edit = EditClientDescriptor {
            phone: Some(Phone::new("91234567").unwrap()),
            ..Default::default()
        };
        assert!(edit.is_any_field_edited());
    }
}
