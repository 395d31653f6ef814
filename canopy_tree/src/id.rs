// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers.

use core::fmt;

/// Identifier for a node in a [`StyleRegistry`](crate::StyleRegistry).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Nodes are addressed by name at the API surface; `NodeId` is what the
/// registry stores for parent/child links and what change sinks receive.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On unregister, the slot is freed; any `NodeId` that pointed to it is stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `NodeId`.
///
/// Stale ids never alias a different live node because the generation must
/// match. Use [`StyleRegistry::is_alive`](crate::StyleRegistry::is_alive) to
/// check liveness.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn slot(self) -> u32 {
        self.0
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the generation of the slot this id was issued for.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn generation_distinguishes_reused_slots() {
        let first = NodeId::new(3, 1);
        let reused = NodeId::new(3, 2);
        assert_ne!(first, reused);
        assert_eq!(first.idx(), reused.idx());
        assert_eq!(reused.generation(), 2);
    }

    #[test]
    fn debug_shows_slot_and_generation() {
        assert_eq!(format!("{:?}", NodeId::new(3, 2)), "NodeId(3v2)");
    }
}
