//! Ordered collection with a name-uniqueness invariant.
//!
//! Both directories (properties and clients) are a `UniqueList`. Every
//! mutation re-checks the invariant; reads hand out borrows only, so callers
//! cannot reorder or mutate entries behind the list's back.

use super::fields::Name;
use crate::error::DirectoryError;
use std::collections::HashSet;

/// Entities that are "the same" when their names match, regardless of the
/// other fields.
pub trait Identity {
    fn name(&self) -> &Name;

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &Name) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Appends `item`, keeping insertion order.
    pub fn add(&mut self, item: T) -> Result<(), DirectoryError> {
        if self.contains(item.name()) {
            return Err(DirectoryError::Duplicate(item.name().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, name: &Name) -> Result<T, DirectoryError> {
        let index = self
            .position(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Substitutes the entry named `target` with `replacement` in place.
    ///
    /// The replacement may keep the target's name or take a new one, as long
    /// as the new name is not held by some other entry.
    pub fn replace(&mut self, target: &Name, replacement: T) -> Result<(), DirectoryError> {
        let index = self
            .position(target)
            .ok_or_else(|| DirectoryError::NotFound(target.to_string()))?;

        if replacement.name() != target && self.contains(replacement.name()) {
            return Err(DirectoryError::Duplicate(replacement.name().to_string()));
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Replaces the whole contents. Leaves the list untouched if `items`
    /// holds two entries with the same name.
    pub fn set_all(&mut self, items: Vec<T>) -> Result<(), DirectoryError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name()) {
                return Err(DirectoryError::Duplicate(item.name().to_string()));
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries accepted by `predicate`, in insertion order.
    pub fn filtered<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }

    fn position(&self, name: &Name) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}

impl<'a, T: Identity> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
