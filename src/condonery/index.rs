//! # Display Indexes
//!
//! Users refer to entries by their position in the list they are currently
//! looking at: `delete 2` removes the second *displayed* property, not the
//! second property in the directory. After `find sunny`, index 1 is the first
//! match; after `list`, it is the first property overall.
//!
//! Consequently an index is only meaningful together with the filter that was
//! active when it was resolved. Two commands issued back to back can resolve
//! the same index to different entries if a `find` or `list` ran in between.
//! This is the documented behaviour and commands do not try to guard against
//! it.
//!
//! Indexes are one-based on the outside and converted to zero-based only when
//! looking an entry up.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

const INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(NonZeroUsize);

impl DisplayIndex {
    pub fn from_one_based(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }

    /// Picks the entry this index points at in a displayed list.
    pub fn select<'a, T>(&self, displayed: &[&'a T]) -> Option<&'a T> {
        displayed.get(self.zero_based()).copied()
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(INVALID_INDEX.to_string());
        }
        s.parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or_else(|| INVALID_INDEX.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let idx: DisplayIndex = "3".parse().unwrap();
        assert_eq!(idx.one_based(), 3);
        assert_eq!(idx.zero_based(), 2);
        assert_eq!(idx.to_string(), "3");
    }

    #[test]
    fn trims_whitespace() {
        let idx: DisplayIndex = "  1 ".parse().unwrap();
        assert_eq!(idx.one_based(), 1);
    }

    #[test]
    fn rejects_zero_negative_and_text() {
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("+1".parse::<DisplayIndex>().is_err());
        assert!("one".parse::<DisplayIndex>().is_err());
        assert!("1 2".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn select_resolves_against_the_given_list() {
        let items = ["a", "b", "c"];
        let displayed: Vec<&&str> = items.iter().collect();
        let second = DisplayIndex::from_one_based(2).unwrap();
        assert_eq!(second.select(&displayed), Some(&"b"));

        let fourth = DisplayIndex::from_one_based(4).unwrap();
        assert_eq!(fourth.select(&displayed), None);
    }
}
