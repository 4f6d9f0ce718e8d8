//! Name-keyed child sets.

use crate::error::NamespaceError;
use crate::name::{self, NameKey};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Entry<I> {
    name: String,
    id: I,
}

/// A set of handles keyed case-insensitively by display name.
///
/// Iteration follows the folded key, so listings are alphabetical and independent of
/// insertion order.
#[derive(Debug, Clone)]
pub struct NameIndex<I> {
    entries: BTreeMap<NameKey, Entry<I>>,
}

impl<I> Default for NameIndex<I> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<I: Copy + PartialEq> NameIndex<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` under `name`.
    ///
    /// Fails with `NameBlank` or with `NameTaken` carrying the existing true-cased name.
    pub fn insert(&mut self, name: &str, id: I) -> Result<(), NamespaceError> {
        if name::is_blank(name) {
            return Err(NamespaceError::NameBlank);
        }
        if let Some(existing) = self.true_name(name) {
            return Err(NamespaceError::NameTaken(existing.to_string()));
        }
        self.entries.insert(
            NameKey::new(name),
            Entry {
                name: name.to_string(),
                id,
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<I> {
        self.entries.get(&NameKey::new(name)).map(|e| e.id)
    }

    /// Existing entry's name with its true capitalization.
    pub fn true_name(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&NameKey::new(name))
            .map(|e| e.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&NameKey::new(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<I> {
        self.entries.remove(&NameKey::new(name)).map(|e| e.id)
    }

    /// Drop whichever entry points at `id`.
    pub fn remove_id(&mut self, id: I) -> bool {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.id != id);
        before != self.entries.len()
    }

    /// Move the entry stored under `old` to `new`. The caller has validated `new`.
    pub fn rekey(&mut self, old: &str, new: &str) -> Option<I> {
        let entry = self.entries.remove(&NameKey::new(old))?;
        let id = entry.id;
        self.entries.insert(
            NameKey::new(new),
            Entry {
                name: new.to_string(),
                id,
            },
        );
        Some(id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name.as_str())
    }

    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.entries.values().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
