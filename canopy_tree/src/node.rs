// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style nodes and per-node resolution.

use alloc::string::String;
use core::borrow::Borrow;

use canopy_style::{AttrValue, StyleMap};
use smallvec::SmallVec;

use crate::id::NodeId;
use crate::resolve::{Layer, NodeLookup, Origin};

/// A named participant in the style tree.
///
/// Each node holds two independent layers over the same attribute universe:
///
/// - **declared**: the node's own style, inherited by every descendant.
/// - **overrides**: applied on top of everything else for this node only;
///   never visible to descendants.
///
/// Nodes are owned by a [`StyleRegistry`](crate::StyleRegistry), which is the
/// only place they can be created or mutated. Parent and child links are
/// [`NodeId`]s into the registry, so a node never owns its relatives.
#[derive(Clone, Debug)]
pub struct StyleNode<K = String> {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) declared: StyleMap<K>,
    pub(crate) overrides: StyleMap<K>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl<K: Ord> StyleNode<K> {
    pub(crate) fn new(id: NodeId, name: String, declared: StyleMap<K>) -> Self {
        Self {
            id,
            name,
            declared,
            overrides: StyleMap::new(),
            parent: None,
            children: SmallVec::new(),
        }
    }

    /// Returns the registry id of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the identifier this node is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared layer.
    #[must_use]
    pub fn declared(&self) -> &StyleMap<K> {
        &self.declared
    }

    /// Returns the override layer.
    #[must_use]
    pub fn overrides(&self) -> &StyleMap<K> {
        &self.overrides
    }

    /// Returns the parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in attachment order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns `true` if this node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Merges `patch` into the declared layer.
    ///
    /// Existing keys are overwritten and new keys added; nothing is removed.
    /// Returns `true` if any stored value changed.
    pub(crate) fn update_style(&mut self, patch: impl IntoIterator<Item = (K, AttrValue)>) -> bool {
        self.declared.merge(patch)
    }

    /// Merges `patch` into the override layer.
    pub(crate) fn override_style(
        &mut self,
        patch: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> bool {
        self.overrides.merge(patch)
    }

    /// Clears the override layer, leaving the declared layer untouched.
    pub(crate) fn reset_overrides(&mut self) -> bool {
        self.overrides.clear()
    }

    /// Computes the effective style of this node.
    ///
    /// Starts from the furthest ancestor's declared layer and merges each
    /// nearer ancestor's declared layer, then this node's declared layer,
    /// then this node's overrides. Ancestor overrides are never consulted.
    /// Attributes nobody sets are absent from the result.
    ///
    /// Nothing is cached: the walk costs O(depth × attributes) per call.
    #[must_use]
    pub fn compute_effective_style<'a, L>(&'a self, lookup: &L) -> StyleMap<K>
    where
        K: Clone + 'a,
        L: NodeLookup<'a, K> + ?Sized,
    {
        let mut chain: SmallVec<[&'a Self; 8]> = SmallVec::new();
        let mut current = self.parent;
        while let Some(id) = current {
            let Some(ancestor) = lookup.lookup(id) else {
                break;
            };
            chain.push(ancestor);
            current = ancestor.parent;
        }

        let mut computed = StyleMap::new();
        for ancestor in chain.iter().rev() {
            computed.merge_from(&ancestor.declared);
        }
        computed.merge_from(&self.declared);
        computed.merge_from(&self.overrides);
        computed
    }

    /// Resolves a single attribute without building the whole computed map.
    ///
    /// Walks from this node toward the root and stops at the first layer that
    /// sets `key`, which yields the same value
    /// [`compute_effective_style`](Self::compute_effective_style) would.
    #[must_use]
    pub fn resolve_value<'a, Q, L>(&'a self, key: &Q, lookup: &L) -> Option<&'a AttrValue>
    where
        K: Borrow<Q> + 'a,
        Q: Ord + ?Sized,
        L: NodeLookup<'a, K> + ?Sized,
    {
        self.resolve_entry(key, lookup).map(|(value, _)| value)
    }

    /// Reports which node and layer supply the effective value of `key`.
    #[must_use]
    pub fn resolve_origin<'a, Q, L>(&'a self, key: &Q, lookup: &L) -> Option<Origin>
    where
        K: Borrow<Q> + 'a,
        Q: Ord + ?Sized,
        L: NodeLookup<'a, K> + ?Sized,
    {
        self.resolve_entry(key, lookup).map(|(_, origin)| origin)
    }

    fn resolve_entry<'a, Q, L>(&'a self, key: &Q, lookup: &L) -> Option<(&'a AttrValue, Origin)>
    where
        K: Borrow<Q> + 'a,
        Q: Ord + ?Sized,
        L: NodeLookup<'a, K> + ?Sized,
    {
        if let Some(value) = self.overrides.get(key) {
            return Some((value, Origin { node: self.id, layer: Layer::Override }));
        }

        let mut node = self;
        loop {
            if let Some(value) = node.declared.get(key) {
                return Some((value, Origin { node: node.id, layer: Layer::Declared }));
            }
            node = lookup.lookup(node.parent?)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Builds a parent-linked chain from root to leaf, one declared map per node.
    fn chain(layers: Vec<StyleMap>) -> Vec<StyleNode> {
        let mut nodes: Vec<StyleNode> = Vec::new();
        for (idx, declared) in layers.into_iter().enumerate() {
            let idx = u32::try_from(idx).unwrap();
            let id = NodeId::new(idx, 1);
            let mut node = StyleNode::new(id, alloc::format!("n{idx}"), declared);
            if let Some(prev) = nodes.last_mut() {
                prev.children.push(id);
                node.parent = Some(prev.id);
            }
            nodes.push(node);
        }
        nodes
    }

    #[test]
    fn root_computes_declared_then_overrides() {
        let mut nodes = chain(alloc::vec![StyleMap::new().with("color", "red").with("width", 10)]);
        assert!(nodes[0].override_style([("color".into(), AttrValue::from("blue"))]));

        let lookup = |id: NodeId| nodes.get(id.idx());
        let computed = nodes[0].compute_effective_style(&lookup);
        assert_eq!(computed.get("color"), Some(&AttrValue::from("blue")));
        assert_eq!(computed.get("width"), Some(&AttrValue::Int(10)));
    }

    #[test]
    fn nearer_ancestors_shadow_further_ones() {
        let nodes = chain(alloc::vec![
            StyleMap::new().with("color", "red").with("font", "serif"),
            StyleMap::new().with("color", "green"),
            StyleMap::new(),
        ]);
        let lookup = |id: NodeId| nodes.get(id.idx());
        let leaf = &nodes[2];

        let computed = leaf.compute_effective_style(&lookup);
        assert_eq!(computed.get("color"), Some(&AttrValue::from("green")));
        assert_eq!(computed.get("font"), Some(&AttrValue::from("serif")));
        assert_eq!(leaf.resolve_value("color", &lookup), computed.get("color"));
    }

    #[test]
    fn ancestor_overrides_do_not_leak() {
        let mut nodes = chain(alloc::vec![
            StyleMap::new().with("color", "red"),
            StyleMap::new(),
        ]);
        nodes[0].override_style([("color".into(), AttrValue::from("blue"))]);
        let lookup = |id: NodeId| nodes.get(id.idx());

        let child = &nodes[1];
        assert_eq!(
            child.compute_effective_style(&lookup).get("color"),
            Some(&AttrValue::from("red"))
        );
        assert_eq!(
            child.resolve_origin("color", &lookup),
            Some(Origin { node: nodes[0].id, layer: Layer::Declared })
        );
    }

    #[test]
    fn update_reports_change_only_when_values_differ() {
        let mut nodes = chain(alloc::vec![StyleMap::new().with("color", "red")]);
        let node = &mut nodes[0];
        assert!(!node.update_style([("color".into(), AttrValue::from("red"))]));
        assert!(node.update_style([("color".into(), AttrValue::from("teal"))]));
        assert!(!node.reset_overrides());
        node.override_style([("width".into(), AttrValue::Int(5))]);
        assert!(node.reset_overrides());
        assert!(node.overrides().is_empty());
        assert_eq!(node.declared().get("color"), Some(&AttrValue::from("teal")));
    }

    #[test]
    fn missing_attribute_is_absent() {
        let nodes = chain(alloc::vec![StyleMap::new(), StyleMap::new()]);
        let lookup = |id: NodeId| nodes.get(id.idx());
        assert!(nodes[1].resolve_value("color", &lookup).is_none());
        assert!(nodes[1].resolve_origin("color", &lookup).is_none());
        assert!(nodes[1].compute_effective_style(&lookup).is_empty());
    }
}
