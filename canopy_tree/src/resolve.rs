// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor lookup and provenance types used by resolution.

use crate::id::NodeId;
use crate::node::StyleNode;

/// A lookup mechanism for walking parent chains during resolution.
///
/// Given a [`NodeId`], returns the node it names, if live. The node carries
/// its own parent link, so a lookup is all a resolver needs to walk from a
/// leaf to its root.
///
/// [`StyleRegistry`](crate::StyleRegistry) implements this through a shared
/// reference, and so does any `Fn(NodeId) -> Option<&StyleNode<K>>`.
///
/// The lookup must describe a forest. The registry guarantees that; a custom
/// lookup that forms a cycle makes resolution loop.
pub trait NodeLookup<'a, K: 'a> {
    /// Looks up the node named by `id`.
    fn lookup(&self, id: NodeId) -> Option<&'a StyleNode<K>>;
}

impl<'a, K, F> NodeLookup<'a, K> for F
where
    K: 'a,
    F: Fn(NodeId) -> Option<&'a StyleNode<K>>,
{
    #[inline]
    fn lookup(&self, id: NodeId) -> Option<&'a StyleNode<K>> {
        self(id)
    }
}

/// Which of a node's two style layers supplied a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The node's declared style, inherited by its descendants.
    Declared,
    /// The node's overrides, visible only on that node.
    Override,
}

/// Where an effective attribute value came from.
///
/// Returned by [`StyleNode::resolve_origin`] and
/// [`StyleRegistry::origin_of`](crate::StyleRegistry::origin_of).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    /// The node whose layer holds the value.
    pub node: NodeId,
    /// The layer that holds it.
    pub layer: Layer,
}

impl Origin {
    /// Returns `true` if the value was inherited from an ancestor rather than
    /// set on `node` itself.
    #[must_use]
    pub fn is_inherited_by(&self, node: NodeId) -> bool {
        self.node != node
    }
}
