// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change kinds reported to sinks.

bitflags::bitflags! {
    /// What changed about a node.
    ///
    /// Sinks receive one flag per notification; [`ChangeSet`](crate::ChangeSet)
    /// accumulates the union per key until drained.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Change: u8 {
        /// The node was created.
        const CREATED   = 0b0000_0001;
        /// The node was removed; its key is stale from now on.
        const REMOVED   = 0b0000_0010;
        /// The node's declared style changed. Descendants inherit it, so their
        /// computed styles may have changed too.
        const DECLARED  = 0b0000_0100;
        /// The node's overrides changed. Only this node is affected.
        const OVERRIDE  = 0b0000_1000;
        /// The node gained or lost a parent or a child.
        const STRUCTURE = 0b0001_0000;
    }
}

impl Change {
    /// Returns `true` if descendants of the node may resolve differently.
    ///
    /// Overrides are node-local, so only declared-style and structural
    /// changes reach the subtree.
    #[must_use]
    pub const fn affects_descendants(self) -> bool {
        self.intersects(Self::DECLARED.union(Self::STRUCTURE).union(Self::REMOVED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_local() {
        assert!(!Change::OVERRIDE.affects_descendants());
        assert!(!Change::CREATED.affects_descendants());
    }

    #[test]
    fn declared_and_structure_reach_subtree() {
        assert!(Change::DECLARED.affects_descendants());
        assert!(Change::STRUCTURE.affects_descendants());
        assert!((Change::OVERRIDE | Change::DECLARED).affects_descendants());
    }
}
