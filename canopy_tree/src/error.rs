// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry errors.

use alloc::string::String;
use core::fmt;

/// Error returned by structural registry operations.
///
/// Plain style mutations never fail: addressing an unknown identifier is a
/// no-op that returns `false`. Only operations that cannot meaningfully
/// no-op (registration and attachment) report errors, and each one leaves
/// the registry unchanged when it does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// No node is registered under `id`.
    UnknownIdentifier {
        /// The identifier that was looked up.
        id: String,
    },
    /// A node is already registered under `id`.
    ///
    /// Only returned under [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    DuplicateIdentifier {
        /// The identifier that was already taken.
        id: String,
    },
    /// Attaching `child` under `parent` would make a node its own ancestor.
    CyclicAttachment {
        /// The node being attached.
        child: String,
        /// The requested parent, which is `child` itself or one of its descendants.
        parent: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdentifier { id } => write!(f, "no style node registered as {id:?}"),
            Self::DuplicateIdentifier { id } => {
                write!(f, "a style node is already registered as {id:?}")
            }
            Self::CyclicAttachment { child, parent } => write!(
                f,
                "attaching {child:?} under {parent:?} would create a cycle"
            ),
        }
    }
}

impl core::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_identifiers() {
        let err = RegistryError::CyclicAttachment {
            child: "r".into(),
            parent: "b".into(),
        };
        assert_eq!(err.to_string(), r#"attaching "r" under "b" would create a cycle"#);

        let err = RegistryError::UnknownIdentifier { id: "ghost".into() };
        assert_eq!(err.to_string(), r#"no style node registered as "ghost""#);
    }
}
