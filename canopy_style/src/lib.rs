// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Style: attribute values and ordered partial style maps.
//!
//! This crate provides the payload types for the canopy style cascade. It
//! knows nothing about trees; resolution lives in `canopy_tree`.
//!
//! ## Core Concepts
//!
//! - [`AttrValue`]: a scalar payload (string, integer, float, or boolean).
//! - [`StyleMap`]: an ordered partial mapping from attribute key to value.
//!   The same type is used for declared styles, overrides, patches, and
//!   computed results.
//! - [`Attribute`]: the documented vocabulary of recognized keys, for
//!   consumers that want a closed key type.
//!
//! ## Merge Semantics
//!
//! [`StyleMap::merge`] overwrites existing keys and adds new ones; it never
//! removes. Layering maps from lowest to highest precedence with repeated
//! merges yields "closest source wins".
//!
//! ```rust
//! use canopy_style::StyleMap;
//!
//! let inherited: StyleMap = StyleMap::new().with("color", "red").with("size", 10);
//! let declared: StyleMap = StyleMap::new().with("color", "blue");
//!
//! let mut computed = StyleMap::new();
//! computed.merge_from(&inherited);
//! computed.merge_from(&declared);
//!
//! assert_eq!(
//!     computed,
//!     StyleMap::new().with("color", "blue").with("size", 10),
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`AttrValue`], [`StyleMap`] and
//!   [`Attribute`]. Maps serialize as objects keyed by attribute name.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod attribute;
mod map;
mod value;

pub use attribute::{Attribute, AttributeGroup, UnknownAttribute};
pub use map::StyleMap;
pub use value::AttrValue;
