//! Splits the argument part of a command line on `prefix/` markers.
//!
//! `-c n/Alice p/9123 t/a t/b` with prefixes `n/ p/ t/` becomes the preamble
//! `-c`, `n/ -> [Alice]`, `p/ -> [9123]` and `t/ -> [a, b]`. A prefix only
//! counts when it starts the argument string or follows whitespace, so the
//! `p/` inside `ic/` or inside `Blk 5 Ap/1` is not a marker.

use std::collections::HashMap;

pub const PREFIX_NAME: &str = "n/";
pub const PREFIX_ADDRESS: &str = "a/";
pub const PREFIX_TAG: &str = "t/";
pub const PREFIX_PHONE: &str = "p/";
pub const PREFIX_EMAIL: &str = "e/";
pub const PREFIX_INTERESTED_CLIENT: &str = "ic/";

pub const PROPERTY_PREFIXES: &[&str] = &[
    PREFIX_NAME,
    PREFIX_ADDRESS,
    PREFIX_TAG,
    PREFIX_INTERESTED_CLIENT,
];

pub const CLIENT_PREFIXES: &[&str] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMultimap {
    preamble: String,
    values: HashMap<&'static str, Vec<String>>,
}

impl ArgMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_all(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }
}

pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgMultimap {
    let mut markers: Vec<(usize, &'static str)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(*prefix)
                .filter(|(pos, _)| starts_token(args, *pos))
                .map(move |(pos, _)| (pos, *prefix))
        })
        .collect();
    markers.sort_by_key(|(pos, _)| *pos);

    let preamble_end = markers.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in markers.iter().enumerate() {
        let start = pos + prefix.len();
        let end = markers.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}

fn starts_token(args: &str, pos: usize) -> bool {
    args[..pos]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
