// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry configuration.

use canopy_notify::{ChangeSet, ChangeSink};

use crate::id::NodeId;
use crate::registry::StyleRegistry;

/// What [`StyleRegistry::create_element`] does when the identifier is taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// Return [`RegistryError::DuplicateIdentifier`](crate::RegistryError::DuplicateIdentifier)
    /// and leave the existing node alone.
    #[default]
    Reject,
    /// Return the existing node's id untouched.
    ///
    /// The initial style passed to the repeated call is ignored and the
    /// existing node keeps its styles, parent and children. This makes
    /// registration idempotent for hosts that re-run setup code.
    ReturnExisting,
}

/// Builder for a [`StyleRegistry`].
///
/// # Example
///
/// ```rust
/// use canopy_notify::ChangeLog;
/// use canopy_tree::{DuplicatePolicy, RegistryBuilder, StyleRegistry};
///
/// let mut registry: StyleRegistry<String, _> = RegistryBuilder::new()
///     .duplicate_policy(DuplicatePolicy::ReturnExisting)
///     .capacity(16)
///     .sink(ChangeLog::new())
///     .build();
///
/// let first = registry.create_element("panel", []).unwrap();
/// let again = registry.create_element("panel", []).unwrap();
/// assert_eq!(first, again);
/// assert_eq!(registry.sink().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RegistryBuilder<S = ChangeSet<NodeId>> {
    pub(crate) duplicate_policy: DuplicatePolicy,
    pub(crate) capacity: usize,
    pub(crate) sink: S,
}

impl RegistryBuilder {
    /// Creates a builder with the default policy and a [`ChangeSet`] sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            capacity: 0,
            sink: ChangeSet::new(),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RegistryBuilder<S> {
    /// Sets how repeated registrations are handled.
    #[must_use]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Reserves room for `capacity` nodes up front.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the change sink.
    #[must_use]
    pub fn sink<T: ChangeSink<NodeId>>(self, sink: T) -> RegistryBuilder<T> {
        RegistryBuilder {
            duplicate_policy: self.duplicate_policy,
            capacity: self.capacity,
            sink,
        }
    }

    /// Builds the registry.
    #[must_use]
    pub fn build<K: Ord + Clone>(self) -> StyleRegistry<K, S>
    where
        S: ChangeSink<NodeId>,
    {
        StyleRegistry::from_builder(self)
    }
}
