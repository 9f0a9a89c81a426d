//! Insertion-ordered, key-unique collections.
//!
//! Every parent in the tree (tracker → owners, owner → pets, pet → tasks) keeps
//! its children in a `Registry`. Iteration order is insertion order, which the
//! due-task query relies on for deterministic output.

use crate::errors::CoreError;

/// An item addressable by a unique string key within its registry.
pub trait Keyed {
    /// Entity name used in error messages (`"pet"`, `"task"`, ...).
    const ENTITY: &'static str;

    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`, rejecting it when its key is already present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateKey`] and leaves the registry unchanged if
    /// an item with the same key exists.
    pub fn insert(&mut self, item: T) -> Result<(), CoreError> {
        if self.contains(item.key()) {
            return Err(CoreError::DuplicateKey {
                entity_type: T::ENTITY.to_string(),
                key: item.key().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Insert `item`, replacing an existing item with the same key in place.
    ///
    /// Returns the replaced item, if any. A replaced item keeps its position.
    pub fn upsert(&mut self, item: T) -> Option<T> {
        match self.position(item.key()) {
            Some(index) => Some(std::mem::replace(&mut self.items[index], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    /// Remove the item with `key`. Missing keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.position(key).map(|index| self.items.remove(index))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }
}

impl<T> Registry<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
