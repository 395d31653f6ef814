// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: a hierarchical style cascade.
//!
//! A tree of named style nodes where each node's computed style is derived
//! by merging the declared styles of its ancestor chain with its own
//! declared style and node-local overrides.
//!
//! ## Core Concepts
//!
//! - [`StyleRegistry`]: owns every node, indexes them by string identifier,
//!   and is the only mutation surface.
//! - [`StyleNode`]: a node with two layers, **declared** (inherited by
//!   descendants) and **overrides** (this node only).
//! - [`NodeId`]: generational handle used for parent/child links and change
//!   notifications.
//! - [`ElementStyle`]: a mutation handle scoped to one node.
//!
//! ## Precedence
//!
//! From lowest to highest:
//!
//! 1. the furthest ancestor's declared style, then each nearer ancestor's,
//! 2. the node's own declared style,
//! 3. the node's own overrides.
//!
//! A node's overrides are never visible to its descendants. Attributes that
//! nothing sets are absent from the computed style; there are no defaults.
//!
//! ```rust
//! use canopy_style::{AttrValue, StyleMap};
//! use canopy_tree::StyleRegistry;
//!
//! let mut registry = StyleRegistry::new();
//! registry
//!     .create_element(
//!         "r",
//!         StyleMap::new().with("color", "red").with("fontSize", "12px"),
//!     )
//!     .unwrap();
//! registry
//!     .create_child("b", "r", StyleMap::new().with("fontSize", "14px"))
//!     .unwrap();
//!
//! registry.override_child_style("r", [("color".into(), "blue".into())]);
//!
//! // `b` inherits the declared color, not the parent's override.
//! let computed = registry.get_computed_style("b").unwrap();
//! assert_eq!(computed.get("color"), Some(&AttrValue::from("red")));
//! assert_eq!(computed.get("fontSize"), Some(&AttrValue::from("14px")));
//! ```
//!
//! ## Change Notification
//!
//! Computed styles are produced on demand and never cached. Instead, every
//! mutating call that changed state reports the touched node to the
//! registry's [`ChangeSink`](canopy_notify::ChangeSink), synchronously.
//! The default sink is a [`ChangeSet`](canopy_notify::ChangeSet); a host
//! checks it after a batch of mutations and re-reads what it needs.
//!
//! ```rust
//! use canopy_notify::Change;
//! use canopy_style::AttrValue;
//! use canopy_tree::StyleRegistry;
//!
//! let mut registry = StyleRegistry::new();
//! let panel = registry.create_element("panel", []).unwrap();
//! registry.sink_mut().clear();
//!
//! registry.update_parent_style("panel", [("gap".into(), AttrValue::Int(4))]);
//! assert_eq!(registry.sink().get(panel), Change::DECLARED);
//!
//! // Identical patches and unknown identifiers change nothing.
//! registry.sink_mut().clear();
//! registry.update_parent_style("panel", [("gap".into(), AttrValue::Int(4))]);
//! registry.update_parent_style("missing", [("gap".into(), AttrValue::Int(4))]);
//! assert!(registry.sink().is_empty());
//! ```
//!
//! ## Structure
//!
//! Nodes start as roots. [`StyleRegistry::attach`] re-parents a node (and
//! its subtree), rejecting attachments that would form a cycle;
//! [`StyleRegistry::unregister`] removes a node and turns its children into
//! roots.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics are emitted as
//! [`tracing`] events at `debug` and `trace` level; no subscriber is
//! installed.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod handle;
mod id;
mod node;
mod registry;
mod resolve;

pub use config::{DuplicatePolicy, RegistryBuilder};
pub use error::RegistryError;
pub use handle::ElementStyle;
pub use id::NodeId;
pub use node::StyleNode;
pub use registry::StyleRegistry;
pub use resolve::{Layer, NodeLookup, Origin};
