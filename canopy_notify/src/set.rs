// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accumulated changes per key with generation tracking.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::change::Change;
use crate::sink::ChangeSink;

/// Accumulated changes per key, a "dirty flag" for hosts.
///
/// Every notification ORs its [`Change`] into the entry for its key and bumps
/// a generation counter. A host compares generations (or checks
/// [`is_empty`](Self::is_empty)) to decide whether to re-read computed styles,
/// then [`drain`](Self::drain)s the accumulated entries.
///
/// # Example
///
/// ```
/// use canopy_notify::{Change, ChangeSet, ChangeSink};
///
/// let mut changes = ChangeSet::<u32>::new();
/// let seen = changes.generation();
///
/// changes.notify(1, Change::DECLARED);
/// changes.notify(1, Change::OVERRIDE);
/// changes.notify(2, Change::CREATED);
///
/// assert!(changes.generation() > seen);
/// assert_eq!(changes.get(1), Change::DECLARED | Change::OVERRIDE);
///
/// let mut drained: Vec<_> = changes.drain().collect();
/// drained.sort_by_key(|(key, _)| *key);
/// assert_eq!(drained, vec![(1, Change::DECLARED | Change::OVERRIDE), (2, Change::CREATED)]);
/// assert!(changes.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ChangeSet<K>
where
    K: Copy + Eq + Hash,
{
    /// Union of changes seen per key since the last drain.
    entries: HashMap<K, Change>,
    /// Incremented on every mutation.
    generation: u64,
}

impl<K> Default for ChangeSet<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ChangeSet<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    /// Returns the current generation.
    ///
    /// The generation is incremented on every mutation (mark, drain, clear),
    /// so it can be compared against a previous observation to detect that
    /// something happened in between.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Records `change` for `key`.
    ///
    /// A key that is both created and removed since the last drain was never
    /// observable, so its entry is dropped instead of accumulating.
    ///
    /// Returns `true` if the key had no pending changes before this call.
    pub fn mark(&mut self, key: K, change: Change) -> bool {
        self.generation = self.generation.wrapping_add(1);
        let entry = self.entries.entry(key).or_insert(Change::empty());
        let was_clean = entry.is_empty();
        *entry |= change;
        if entry.contains(Change::CREATED | Change::REMOVED) {
            self.entries.remove(&key);
        }
        was_clean
    }

    /// Returns the pending changes for `key` (empty if none).
    #[must_use]
    pub fn get(&self, key: K) -> Change {
        self.entries.get(&key).copied().unwrap_or_default()
    }

    /// Returns `true` if `key` has pending changes.
    #[must_use]
    pub fn is_dirty(&self, key: K) -> bool {
        !self.get(key).is_empty()
    }

    /// Returns `true` if no key has pending changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of keys with pending changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates the pending changes without clearing them.
    pub fn iter(&self) -> impl Iterator<Item = (K, Change)> + '_ {
        self.entries.iter().map(|(k, c)| (*k, *c))
    }

    /// Drains and returns every pending change.
    pub fn drain(&mut self) -> impl Iterator<Item = (K, Change)> + '_ {
        self.generation = self.generation.wrapping_add(1);
        self.entries.drain()
    }

    /// Clears every pending change.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.entries.clear();
    }

    /// Forgets pending changes for one key.
    ///
    /// Returns `true` if the key had pending changes.
    pub fn remove_key(&mut self, key: K) -> bool {
        let removed = self.entries.remove(&key).is_some();
        if removed {
            self.generation = self.generation.wrapping_add(1);
        }
        removed
    }
}

impl<K> ChangeSink<K> for ChangeSet<K>
where
    K: Copy + Eq + Hash,
{
    fn notify(&mut self, key: K, change: Change) {
        self.mark(key, change);
    }
}
