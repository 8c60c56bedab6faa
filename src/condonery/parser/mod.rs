//! # Command Parser
//!
//! Turns one line of user input into a [`Command`]. The first word picks the
//! command, an optional `-p` or `-c` flag picks the entity kind (properties
//! unless `-c` is given) and the rest is split into `prefix/value` arguments
//! by [`args::tokenize`].
//!
//! All field validation happens here, so a [`Command`] only ever carries
//! valid values.

pub mod args;

use crate::commands::{
    add, clear, delete, edit, find, list, Command, EditClientDescriptor, EditPropertyDescriptor,
    EXIT_WORD, HELP_USAGE, HELP_WORD,
};
use crate::error::{ParseError, ValidationError};
use crate::index::DisplayIndex;
use crate::model::{Address, Client, Email, Name, Phone, Property, Tag};
use args::{
    tokenize, ArgMultimap, CLIENT_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL,
    PREFIX_INTERESTED_CLIENT, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, PROPERTY_PREFIXES,
};
use std::collections::BTreeSet;

const PROPERTY_FLAG: &str = "-p";
const CLIENT_FLAG: &str = "-c";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Property,
    Client,
}

pub fn parse(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid(HELP_USAGE));
    }

    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    };
    let (kind, rest) = split_kind(rest);

    match word {
        add::COMMAND_WORD => match kind {
            Kind::Property => parse_add_property(rest),
            Kind::Client => parse_add_client(rest),
        },
        edit::COMMAND_WORD => match kind {
            Kind::Property => parse_edit_property(rest),
            Kind::Client => parse_edit_client(rest),
        },
        delete::COMMAND_WORD => match kind {
            Kind::Property => {
                parse_index(rest, delete::PROPERTY_USAGE).map(Command::DeleteProperty)
            }
            Kind::Client => parse_index(rest, delete::CLIENT_USAGE).map(Command::DeleteClient),
        },
        find::COMMAND_WORD => match kind {
            Kind::Property => {
                parse_keywords(rest, find::PROPERTY_USAGE).map(Command::FindProperties)
            }
            Kind::Client => parse_keywords(rest, find::CLIENT_USAGE).map(Command::FindClients),
        },
        list::COMMAND_WORD => Ok(match kind {
            Kind::Property => Command::ListProperties,
            Kind::Client => Command::ListClients,
        }),
        clear::COMMAND_WORD => Ok(Command::Clear),
        HELP_WORD => Ok(Command::Help),
        EXIT_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Peels a leading `-p`/`-c` flag off the arguments.
fn split_kind(args: &str) -> (Kind, &str) {
    let trimmed = args.trim_start();
    let (first, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };
    match first {
        CLIENT_FLAG => (Kind::Client, rest),
        PROPERTY_FLAG => (Kind::Property, rest),
        _ => (Kind::Property, args),
    }
}

fn invalid(usage: &str) -> ParseError {
    ParseError::InvalidFormat(usage.to_string())
}

fn parse_add_property(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PROPERTY_PREFIXES);
    if !map.preamble().is_empty() || !map.has_all(&[PREFIX_NAME, PREFIX_ADDRESS]) {
        return Err(invalid(add::PROPERTY_USAGE));
    }

    let property = Property::new(
        required(&map, PREFIX_NAME, Name::new, add::PROPERTY_USAGE)?,
        required(&map, PREFIX_ADDRESS, Address::new, add::PROPERTY_USAGE)?,
        parse_all(map.all_values(PREFIX_TAG), Tag::new)?,
        parse_all(map.all_values(PREFIX_INTERESTED_CLIENT), Name::new)?,
    );
    Ok(Command::AddProperty(property))
}

fn parse_add_client(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, CLIENT_PREFIXES);
    let needed = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.preamble().is_empty() || !map.has_all(&needed) {
        return Err(invalid(add::CLIENT_USAGE));
    }

    let client = Client::new(
        required(&map, PREFIX_NAME, Name::new, add::CLIENT_USAGE)?,
        required(&map, PREFIX_PHONE, Phone::new, add::CLIENT_USAGE)?,
        required(&map, PREFIX_EMAIL, Email::new, add::CLIENT_USAGE)?,
        required(&map, PREFIX_ADDRESS, Address::new, add::CLIENT_USAGE)?,
        parse_all(map.all_values(PREFIX_TAG), Tag::new)?,
    );
    Ok(Command::AddClient(client))
}

fn parse_edit_property(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PROPERTY_PREFIXES);
    let index = parse_index(map.preamble(), edit::PROPERTY_USAGE)?;

    let edit = EditPropertyDescriptor {
        name: optional(&map, PREFIX_NAME, Name::new)?,
        address: optional(&map, PREFIX_ADDRESS, Address::new)?,
        tags: optional_set(map.all_values(PREFIX_TAG), Tag::new)?,
        interested_clients: optional_set(map.all_values(PREFIX_INTERESTED_CLIENT), Name::new)?,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditProperty { index, edit })
}

fn parse_edit_client(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, CLIENT_PREFIXES);
    let index = parse_index(map.preamble(), edit::CLIENT_USAGE)?;

    let edit = EditClientDescriptor {
        name: optional(&map, PREFIX_NAME, Name::new)?,
        phone: optional(&map, PREFIX_PHONE, Phone::new)?,
        email: optional(&map, PREFIX_EMAIL, Email::new)?,
        address: optional(&map, PREFIX_ADDRESS, Address::new)?,
        tags: optional_set(map.all_values(PREFIX_TAG), Tag::new)?,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditClient { index, edit })
}

fn parse_index(text: &str, usage: &str) -> Result<DisplayIndex, ParseError> {
    text.parse().map_err(|_| invalid(usage))
}

fn parse_keywords(text: &str, usage: &str) -> Result<Vec<String>, ParseError> {
    let keywords: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(invalid(usage));
    }
    Ok(keywords)
}

fn required<T>(
    map: &ArgMultimap,
    prefix: &str,
    parse: fn(String) -> Result<T, ValidationError>,
    usage: &str,
) -> Result<T, ParseError> {
    let value = map.value(prefix).ok_or_else(|| invalid(usage))?;
    Ok(parse(value.trim().to_string())?)
}

fn optional<T>(
    map: &ArgMultimap,
    prefix: &str,
    parse: fn(String) -> Result<T, ValidationError>,
) -> Result<Option<T>, ParseError> {
    map.value(prefix)
        .map(|value| parse(value.trim().to_string()))
        .transpose()
        .map_err(ParseError::from)
}

fn parse_all<T: Ord>(
    values: &[String],
    parse: fn(String) -> Result<T, ValidationError>,
) -> Result<BTreeSet<T>, ParseError> {
    values
        .iter()
        .map(|value| parse(value.trim().to_string()).map_err(ParseError::from))
        .collect()
}

/// `None` when the prefix is absent; a lone empty value clears the set.
fn optional_set<T: Ord>(
    values: &[String],
    parse: fn(String) -> Result<T, ValidationError>,
) -> Result<Option<BTreeSet<T>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_all(values, parse).map(Some),
    }
}
