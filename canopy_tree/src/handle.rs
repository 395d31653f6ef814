// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A mutation handle scoped to a single node.

use core::borrow::Borrow;

use canopy_notify::ChangeSink;
use canopy_style::{AttrValue, StyleMap};

use crate::id::NodeId;
use crate::node::StyleNode;
use crate::registry::StyleRegistry;

/// Mutable access to one node's styles, obtained from
/// [`StyleRegistry::element`].
///
/// The handle borrows the registry exclusively, so its node cannot be
/// unregistered while the handle lives. Mutations notify the registry's sink
/// exactly as the identifier-based entry points do.
///
/// # Example
///
/// ```rust
/// use canopy_style::AttrValue;
/// use canopy_tree::StyleRegistry;
///
/// let mut registry = StyleRegistry::new();
/// let mut card = registry.element("card");
/// card.update_parent([("padding".into(), AttrValue::Int(8))]);
/// card.override_style([("padding".into(), AttrValue::Int(12))]);
/// assert_eq!(card.computed_value("padding"), Some(&AttrValue::Int(12)));
///
/// assert!(card.reset());
/// assert_eq!(card.computed_value("padding"), Some(&AttrValue::Int(8)));
/// ```
#[derive(Debug)]
pub struct ElementStyle<'r, K, S> {
    registry: &'r mut StyleRegistry<K, S>,
    id: NodeId,
}

impl<'r, K, S> ElementStyle<'r, K, S>
where
    K: Ord + Clone,
    S: ChangeSink<NodeId>,
{
    pub(crate) fn new(registry: &'r mut StyleRegistry<K, S>, id: NodeId) -> Self {
        Self { registry, id }
    }

    fn node(&self) -> &StyleNode<K> {
        self.registry
            .node(self.id)
            .expect("an element handle keeps its node registered")
    }

    /// Returns the id of the node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the identifier the node is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        self.node().name()
    }

    /// Merges `patch` into the declared style, which descendants inherit.
    ///
    /// Returns `true` if a stored value changed.
    pub fn update_parent(&mut self, patch: impl IntoIterator<Item = (K, AttrValue)>) -> bool {
        self.registry.update_declared(self.id, patch)
    }

    /// Merges `patch` into the overrides, visible on this node only.
    pub fn override_style(&mut self, patch: impl IntoIterator<Item = (K, AttrValue)>) -> bool {
        self.registry.update_overrides(self.id, patch)
    }

    /// Clears the overrides. Returns `true` if there was anything to clear.
    pub fn reset(&mut self) -> bool {
        self.registry.clear_overrides(self.id)
    }

    /// Computes the effective style.
    #[must_use]
    pub fn computed(&self) -> StyleMap<K> {
        self.registry.computed_by_id(self.id).unwrap_or_default()
    }

    /// Resolves a single attribute.
    #[must_use]
    pub fn computed_value<Q>(&self, key: &Q) -> Option<&AttrValue>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let registry = &*self.registry;
        self.node().resolve_value(key, &registry)
    }

    /// Returns the declared style.
    #[must_use]
    pub fn declared(&self) -> &StyleMap<K> {
        self.node().declared()
    }

    /// Returns the overrides.
    #[must_use]
    pub fn overrides(&self) -> &StyleMap<K> {
        self.node().overrides()
    }
}
