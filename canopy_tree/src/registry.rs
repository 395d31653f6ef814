// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style registry: node ownership, name index and mutation entry points.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;

use canopy_notify::{Change, ChangeSet, ChangeSink};
use canopy_style::{AttrValue, StyleMap};
use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::config::{DuplicatePolicy, RegistryBuilder};
use crate::error::RegistryError;
use crate::handle::ElementStyle;
use crate::id::NodeId;
use crate::node::StyleNode;
use crate::resolve::{NodeLookup, Origin};

#[derive(Clone, Debug)]
struct Slot<K> {
    generation: u32,
    node: Option<StyleNode<K>>,
}

/// Owns every [`StyleNode`] of one style tree and indexes them by identifier.
///
/// The registry is the only mutation surface: nodes are created, re-parented,
/// restyled and removed through it, addressed by their string identifier.
/// Computed styles are never stored; every query walks from the node to its
/// root, so a read always observes the latest mutation.
///
/// Every call that changes state reports it to the change sink `S` before
/// returning. Calls that change nothing (unknown identifier, identical patch,
/// resetting empty overrides) stay silent.
///
/// - `K`: attribute key type, `String` by default. Use
///   [`Attribute`](canopy_style::Attribute) for a closed vocabulary.
/// - `S`: the change sink, a [`ChangeSet`] by default.
///
/// # Example
///
/// ```rust
/// use canopy_style::{AttrValue, StyleMap};
/// use canopy_tree::StyleRegistry;
///
/// let mut registry = StyleRegistry::new();
/// registry
///     .create_element("root", StyleMap::new().with("color", "red"))
///     .unwrap();
/// registry.create_child("button", "root", []).unwrap();
///
/// registry.override_child_style("button", [("color".into(), "blue".into())]);
/// let button = registry.get_computed_style("button").unwrap();
/// assert_eq!(button.get("color"), Some(&AttrValue::from("blue")));
///
/// registry.reset_child_overrides("button");
/// assert_eq!(
///     registry.get_computed_value("button", "color"),
///     Some(&AttrValue::from("red"))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct StyleRegistry<K = String, S = ChangeSet<NodeId>> {
    slots: Vec<Slot<K>>,
    free: Vec<u32>,
    by_name: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
    duplicate_policy: DuplicatePolicy,
    sink: S,
}

impl StyleRegistry {
    /// Creates an empty registry with string keys and a [`ChangeSet`] sink.
    ///
    /// The sink accumulates one entry per touched node until it is drained,
    /// so hosts should [`drain`](ChangeSet::drain) it after each batch of
    /// mutations. Nodes created and unregistered between two drains leave no
    /// entry behind. Use [`with_sink`](Self::with_sink) with
    /// [`Discard`](canopy_notify::Discard) to ignore changes entirely.
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }
}

impl<K, S> Default for StyleRegistry<K, S>
where
    K: Ord + Clone,
    S: ChangeSink<NodeId> + Default,
{
    fn default() -> Self {
        RegistryBuilder::new().sink(S::default()).build()
    }
}

impl<K: Ord, S> StyleRegistry<K, S> {
    pub(crate) fn from_builder(builder: RegistryBuilder<S>) -> Self {
        Self {
            slots: Vec::with_capacity(builder.capacity),
            free: Vec::new(),
            by_name: HashMap::with_capacity(builder.capacity),
            roots: Vec::new(),
            duplicate_policy: builder.duplicate_policy,
            sink: builder.sink,
        }
    }

    /// Returns the configured duplicate policy.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    /// Returns the change sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the change sink mutably, e.g. to drain a [`ChangeSet`].
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if no node is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Returns `true` if a node is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the id of the node registered under `name`.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Returns `true` if `id` names a live node.
    ///
    /// Ids of unregistered nodes stay dead even after their slot is reused.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the node named by `id`, if live.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&StyleNode<K>> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut StyleNode<K>> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    /// Returns the node registered under `name`.
    #[must_use]
    pub fn get_element(&self, name: &str) -> Option<&StyleNode<K>> {
        self.node(self.id_of(name)?)
    }

    /// Returns the parent of the node registered under `name`.
    #[must_use]
    pub fn parent_of(&self, name: &str) -> Option<&StyleNode<K>> {
        self.node(self.get_element(name)?.parent?)
    }

    /// Iterates the children of the node registered under `name`, in
    /// attachment order. Empty for unknown identifiers.
    pub fn children_of(&self, name: &str) -> impl Iterator<Item = &StyleNode<K>> + '_ {
        self.get_element(name)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|id| self.node(*id))
    }

    /// Iterates the ancestors of the node registered under `name`, nearest
    /// first. Empty for unknown identifiers and roots.
    pub fn ancestors(&self, name: &str) -> impl Iterator<Item = &StyleNode<K>> + '_ {
        let first = self
            .get_element(name)
            .and_then(|node| node.parent)
            .and_then(|id| self.node(id));
        core::iter::successors(first, |node| node.parent.and_then(|id| self.node(id)))
    }

    /// Iterates the descendants of the node registered under `name` in
    /// depth-first pre-order, excluding the node itself.
    ///
    /// Hosts use this to expand a [`Change::DECLARED`] or
    /// [`Change::STRUCTURE`] notification to every node whose computed style
    /// may have changed.
    pub fn descendants(&self, name: &str) -> impl Iterator<Item = &StyleNode<K>> + '_ {
        let mut stack: Vec<NodeId> = self
            .get_element(name)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        core::iter::from_fn(move || {
            let node = self.node(stack.pop()?)?;
            stack.extend(node.children.iter().rev().copied());
            Some(node)
        })
    }

    /// Iterates every live node in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleNode<K>> + '_ {
        self.slots.iter().filter_map(|slot| slot.node.as_ref())
    }

    /// Iterates the parentless nodes.
    pub fn roots(&self) -> impl Iterator<Item = &StyleNode<K>> + '_ {
        self.roots.iter().filter_map(|id| self.node(*id))
    }

    /// Computes the effective style of the node registered under `name`.
    ///
    /// See [`StyleNode::compute_effective_style`] for the precedence rules.
    #[must_use]
    pub fn get_computed_style(&self, name: &str) -> Option<StyleMap<K>>
    where
        K: Clone,
    {
        self.computed_by_id(self.id_of(name)?)
    }

    pub(crate) fn computed_by_id(&self, id: NodeId) -> Option<StyleMap<K>>
    where
        K: Clone,
    {
        Some(self.node(id)?.compute_effective_style(&self))
    }

    /// Resolves a single attribute of the node registered under `name`.
    #[must_use]
    pub fn get_computed_value<Q>(&self, name: &str, key: &Q) -> Option<&AttrValue>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_element(name)?.resolve_value(key, &self)
    }

    /// Reports which node and layer supply the effective value of `key` for
    /// the node registered under `name`.
    #[must_use]
    pub fn origin_of<Q>(&self, name: &str, key: &Q) -> Option<Origin>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_element(name)?.resolve_origin(key, &self)
    }

    /// Returns `true` if `ancestor` is `node` or lies on `node`'s parent chain.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn name_of(&self, id: NodeId) -> String {
        self.node(id).map(|node| node.name.clone()).unwrap_or_default()
    }
}

impl<'a, K: Ord, S> NodeLookup<'a, K> for &'a StyleRegistry<K, S> {
    #[inline]
    fn lookup(&self, id: NodeId) -> Option<&'a StyleNode<K>> {
        StyleRegistry::node(*self, id)
    }
}

impl<K, S> StyleRegistry<K, S>
where
    K: Ord + Clone,
    S: ChangeSink<NodeId>,
{
    /// Creates an empty registry reporting changes to `sink`.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        RegistryBuilder::new().sink(sink).build()
    }

    /// Registers a new root node under `name` with `initial` as its declared
    /// style.
    ///
    /// If `name` is taken, the outcome depends on the
    /// [`DuplicatePolicy`]: `Reject` returns
    /// [`RegistryError::DuplicateIdentifier`]; `ReturnExisting` returns the
    /// existing id and ignores `initial`.
    pub fn create_element(
        &mut self,
        name: &str,
        initial: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> Result<NodeId, RegistryError> {
        if let Some(existing) = self.id_of(name) {
            return match self.duplicate_policy {
                DuplicatePolicy::Reject => {
                    debug!(name, "rejected duplicate style node");
                    Err(RegistryError::DuplicateIdentifier { id: name.into() })
                }
                DuplicatePolicy::ReturnExisting => Ok(existing),
            };
        }
        Ok(self.insert_root(name, initial.into_iter().collect()))
    }

    /// Registers `name` and attaches it under `parent` in one step.
    ///
    /// An unknown `parent` is rejected before anything is created. A taken
    /// `name` follows the [`DuplicatePolicy`] exactly as
    /// [`create_element`](Self::create_element) does; under `ReturnExisting`
    /// the existing node is not moved.
    pub fn create_child(
        &mut self,
        name: &str,
        parent: &str,
        initial: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> Result<NodeId, RegistryError> {
        let parent_id = self.id_of(parent).ok_or_else(|| RegistryError::UnknownIdentifier {
            id: parent.into(),
        })?;
        if self.contains(name) {
            // An existing node keeps its place in the tree.
            return self.create_element(name, initial);
        }
        let id = self.create_element(name, initial)?;
        self.attach_ids(id, parent_id)?;
        Ok(id)
    }

    /// Returns the node registered under `name`, creating an empty root if
    /// there is none.
    pub fn ensure_element(&mut self, name: &str) -> NodeId {
        match self.id_of(name) {
            Some(id) => id,
            None => self.insert_root(name, StyleMap::new()),
        }
    }

    /// Returns a handle scoped to the node registered under `name`, creating
    /// an empty root if there is none.
    pub fn element(&mut self, name: &str) -> ElementStyle<'_, K, S> {
        let id = self.ensure_element(name);
        ElementStyle::new(self, id)
    }

    fn insert_root(&mut self, name: &str, declared: StyleMap<K>) -> NodeId {
        let id = if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.generation = entry.generation.wrapping_add(1);
            NodeId::new(slot, entry.generation)
        } else {
            assert!(
                self.slots.len() < u32::MAX as usize,
                "style registry ran out of slots"
            );
            #[expect(
                clippy::cast_possible_truncation,
                reason = "bounded by the assertion above"
            )]
            let slot = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: None,
            });
            NodeId::new(slot, 1)
        };

        self.slots[id.idx()].node = Some(StyleNode::new(id, name.into(), declared));
        self.by_name.insert(name.into(), id);
        self.roots.push(id);
        self.sink.notify(id, Change::CREATED);
        debug!(name, ?id, "created style node");
        id
    }

    /// Removes the node registered under `name`.
    ///
    /// The node is detached from its parent, its children become roots, and
    /// its slot is freed so that stale [`NodeId`]s stop resolving. Returns
    /// `false` for unknown identifiers.
    pub fn unregister(&mut self, name: &str) -> bool {
        let Some(id) = self.id_of(name) else {
            trace!(name, "unregister ignored: unknown identifier");
            return false;
        };
        self.unlink(id);
        self.by_name.remove(name);
        let Some(node) = self.slots[id.idx()].node.take() else {
            return false;
        };
        self.free.push(id.slot());
        self.sink.notify(id, Change::REMOVED);

        for &child in &node.children {
            if let Some(child_node) = self.node_mut(child) {
                child_node.parent = None;
            }
            self.roots.push(child);
            self.sink.notify(child, Change::STRUCTURE);
        }
        debug!(
            name,
            ?id,
            orphaned = node.children.len(),
            "unregistered style node"
        );
        true
    }

    /// Attaches `child` under `parent`, detaching it from its current parent
    /// first.
    ///
    /// The whole subtree moves with `child`. Attaching to the current parent
    /// succeeds without changes. Nothing is modified when an error is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownIdentifier`] if either identifier is unknown.
    /// - [`RegistryError::CyclicAttachment`] if `parent` is `child` or one of
    ///   its descendants.
    pub fn attach(&mut self, child: &str, parent: &str) -> Result<(), RegistryError> {
        let child_id = self
            .id_of(child)
            .ok_or_else(|| RegistryError::UnknownIdentifier { id: child.into() })?;
        let parent_id = self
            .id_of(parent)
            .ok_or_else(|| RegistryError::UnknownIdentifier { id: parent.into() })?;
        self.attach_ids(child_id, parent_id)
    }

    fn attach_ids(&mut self, child: NodeId, parent: NodeId) -> Result<(), RegistryError> {
        if self.node(child).and_then(StyleNode::parent) == Some(parent) {
            return Ok(());
        }
        if self.is_ancestor_or_self(child, parent) {
            let err = RegistryError::CyclicAttachment {
                child: self.name_of(child),
                parent: self.name_of(parent),
            };
            debug!(%err, "rejected attachment");
            return Err(err);
        }

        self.unlink(child);
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        self.sink.notify(child, Change::STRUCTURE);
        self.sink.notify(parent, Change::STRUCTURE);
        trace!(?child, ?parent, "attached style node");
        Ok(())
    }

    /// Makes the node registered under `name` a root again.
    ///
    /// Returns `false` if the identifier is unknown or the node already is a
    /// root.
    pub fn detach(&mut self, name: &str) -> bool {
        let Some(id) = self.id_of(name) else {
            return false;
        };
        if self.node(id).is_none_or(StyleNode::is_root) {
            return false;
        }
        self.unlink(id);
        self.roots.push(id);
        self.sink.notify(id, Change::STRUCTURE);
        true
    }

    /// Severs `id` from its parent, or from the root list if it has none.
    ///
    /// The old parent is notified; `id` itself is left for the caller.
    fn unlink(&mut self, id: NodeId) {
        let Some(parent) = self.node_mut(id).and_then(|node| node.parent.take()) else {
            self.roots.retain(|root| *root != id);
            return;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|child| *child != id);
        }
        self.sink.notify(parent, Change::STRUCTURE);
    }

    /// Merges `patch` into the declared style of the node registered under
    /// `name`. Descendants inherit the change.
    ///
    /// Returns `true` if the node exists and a stored value changed. Unknown
    /// identifiers are ignored; no node is created.
    pub fn update_parent_style(
        &mut self,
        name: &str,
        patch: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> bool {
        match self.id_of(name) {
            Some(id) => self.update_declared(id, patch),
            None => {
                trace!(name, "style update ignored: unknown identifier");
                false
            }
        }
    }

    /// Merges `patch` into the overrides of the node registered under
    /// `name`. Only that node's computed style is affected.
    ///
    /// Returns `true` if the node exists and a stored value changed.
    pub fn override_child_style(
        &mut self,
        name: &str,
        patch: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> bool {
        match self.id_of(name) {
            Some(id) => self.update_overrides(id, patch),
            None => {
                trace!(name, "override ignored: unknown identifier");
                false
            }
        }
    }

    /// Clears the overrides of the node registered under `name`.
    ///
    /// Returns `true` if there was anything to clear.
    pub fn reset_child_overrides(&mut self, name: &str) -> bool {
        match self.id_of(name) {
            Some(id) => self.clear_overrides(id),
            None => {
                trace!(name, "reset ignored: unknown identifier");
                false
            }
        }
    }

    pub(crate) fn update_declared(
        &mut self,
        id: NodeId,
        patch: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> bool {
        let changed = self
            .node_mut(id)
            .is_some_and(|node| node.update_style(patch));
        if changed {
            self.sink.notify(id, Change::DECLARED);
        }
        changed
    }

    pub(crate) fn update_overrides(
        &mut self,
        id: NodeId,
        patch: impl IntoIterator<Item = (K, AttrValue)>,
    ) -> bool {
        let changed = self
            .node_mut(id)
            .is_some_and(|node| node.override_style(patch));
        if changed {
            self.sink.notify(id, Change::OVERRIDE);
        }
        changed
    }

    pub(crate) fn clear_overrides(&mut self, id: NodeId) -> bool {
        let changed = self.node_mut(id).is_some_and(StyleNode::reset_overrides);
        if changed {
            self.sink.notify(id, Change::OVERRIDE);
        }
        changed
    }
}
