// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Notify: synchronous change notification for style trees.
//!
//! A style tree resolves computed styles on demand and never pushes results.
//! What it does push is the fact that "something changed", so a host knows
//! to re-read computed styles and refresh its presentation. This crate
//! provides that seam:
//!
//! - [`Change`]: flags describing what changed about a node.
//! - [`ChangeSink`]: the trait a tree calls synchronously from every
//!   mutating call that changed state.
//! - Sinks: [`ChangeSet`] (accumulated dirty flags with a generation counter),
//!   [`ChangeLog`] (ordered recorder), [`Discard`], and any `FnMut(K, Change)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_notify::{Change, ChangeSet, ChangeSink};
//!
//! let mut dirty = ChangeSet::<u32>::new();
//! let rendered_at = dirty.generation();
//!
//! // A tree reports a declared-style change on node 3.
//! dirty.notify(3, Change::DECLARED);
//!
//! if dirty.generation() != rendered_at {
//!     for (node, change) in dirty.drain() {
//!         // Declared styles are inherited, so the host refreshes the subtree.
//!         assert!(change.affects_descendants());
//!         # let _ = node;
//!     }
//! }
//! ```
//!
//! ## Propagation
//!
//! Producers report only the node they touched. [`Change::affects_descendants`]
//! tells a host whether the node's subtree needs refreshing too; expanding to
//! the subtree is the host's choice, which keeps every mutation O(1).
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod change;
mod set;
mod sink;

pub use change::Change;
pub use set::ChangeSet;
pub use sink::{ChangeLog, ChangeSink, Discard};
