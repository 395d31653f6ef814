// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered partial style maps.
//!
//! This module provides [`StyleMap`], the partial mapping from attribute key
//! to [`AttrValue`] used for declared styles, overrides, patches, and
//! computed results alike.
//!
//! # Implementation
//!
//! Entries live in a sorted `SmallVec` searched with binary search. Style
//! layers usually hold a handful of attributes, so the first
//! eight entries are stored inline and lookups stay on one
//! cache line or two.

use core::borrow::Borrow;
use core::fmt;

use smallvec::SmallVec;

use crate::value::AttrValue;

/// Inline capacity for style entries before spilling to the heap.
const INLINE_CAPACITY: usize = 8;

/// An ordered partial mapping from attribute key to [`AttrValue`].
///
/// The key type is generic: `String` gives an open vocabulary, while
/// [`Attribute`](crate::Attribute) (or any consumer-defined `Ord` type) gives
/// a closed one. Iteration is always in key order.
///
/// # Example
///
/// ```rust
/// use canopy_style::StyleMap;
///
/// let mut declared: StyleMap = StyleMap::new()
///     .with("color", "red")
///     .with("size", 10);
///
/// let changed = declared.merge(StyleMap::new().with("color", "blue"));
/// assert!(changed);
/// assert_eq!(declared.get("color").and_then(|v| v.as_str()), Some("blue"));
/// assert_eq!(declared.get("size").and_then(|v| v.as_int()), Some(10));
/// ```
#[derive(Clone, PartialEq)]
pub struct StyleMap<K = alloc::string::String> {
    /// Sorted by key for binary search lookup.
    entries: SmallVec<[(K, AttrValue); INLINE_CAPACITY]>,
}

impl<K> Default for StyleMap<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<K: Ord> StyleMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    fn find<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(k, _)| <K as Borrow<Q>>::borrow(k).cmp(key))
    }

    /// Gets the value for an attribute, if set.
    #[must_use]
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&AttrValue>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok().map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if the attribute is set.
    #[must_use]
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_ok()
    }

    /// Sets an attribute, returning the previous value if there was one.
    pub fn insert(&mut self, key: K, value: AttrValue) -> Option<AttrValue> {
        match self.find(&key) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (key, value));
                None
            }
        }
    }

    /// Removes an attribute, returning its value if it was set.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<AttrValue>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).ok().map(|idx| self.entries.remove(idx).1)
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<K>, value: impl Into<AttrValue>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Merges a patch into this map.
    ///
    /// Existing keys are overwritten and new keys are added; nothing is ever
    /// removed. Returns `true` if any stored value changed.
    pub fn merge(&mut self, patch: impl IntoIterator<Item = (K, AttrValue)>) -> bool {
        let mut changed = false;
        for (key, value) in patch {
            match self.find(&key) {
                Ok(idx) => {
                    let slot = &mut self.entries[idx].1;
                    if *slot != value {
                        *slot = value;
                        changed = true;
                    }
                }
                Err(idx) => {
                    self.entries.insert(idx, (key, value));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Merges another map into this one by cloning its entries.
    ///
    /// Same semantics as [`merge`](Self::merge): `other` wins on shared keys.
    pub fn merge_from(&mut self, other: &Self)
    where
        K: Clone,
    {
        if self.entries.is_empty() {
            self.entries.clone_from(&other.entries);
            return;
        }
        for (key, value) in &other.entries {
            match self.find(key) {
                Ok(idx) => self.entries[idx].1.clone_from(value),
                Err(idx) => self.entries.insert(idx, (key.clone(), value.clone())),
            }
        }
    }

    /// Removes every attribute.
    ///
    /// Returns `true` if the map was not already empty.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.entries.is_empty();
        self.entries.clear();
        had_entries
    }

    /// Returns an iterator over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &AttrValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &AttrValue> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: fmt::Debug> fmt::Debug for StyleMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Ord> FromIterator<(K, AttrValue)> for StyleMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, AttrValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.merge(iter);
        map
    }
}

impl<K: Ord> Extend<(K, AttrValue)> for StyleMap<K> {
    fn extend<I: IntoIterator<Item = (K, AttrValue)>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<K> IntoIterator for StyleMap<K> {
    type Item = (K, AttrValue);
    type IntoIter = smallvec::IntoIter<[(K, AttrValue); INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::StyleMap;
    use crate::value::AttrValue;

    impl<K: Serialize> Serialize for StyleMap<K> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
        }
    }

    impl<'de, K> Deserialize<'de> for StyleMap<K>
    where
        K: Deserialize<'de> + Ord,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let map = BTreeMap::<K, AttrValue>::deserialize(deserializer)?;
            Ok(map.into_iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    fn map(pairs: &[(&str, AttrValue)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn empty_map() {
        let style = StyleMap::<String>::new();
        assert!(style.is_empty());
        assert_eq!(style.len(), 0);
        assert!(style.get("color").is_none());
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut style = StyleMap::<String>::new();
        assert_eq!(style.insert("color".into(), "red".into()), None);
        assert_eq!(
            style.insert("color".into(), "blue".into()),
            Some(AttrValue::from("red"))
        );
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("color"), Some(&AttrValue::from("blue")));
    }

    #[test]
    fn keys_are_sorted() {
        let style: StyleMap = StyleMap::new()
            .with("padding", 8)
            .with("background", "black")
            .with("margin", 0);

        let keys: Vec<_> = style.keys().map(String::as_str).collect();
        assert_eq!(keys, ["background", "margin", "padding"]);
    }

    #[test]
    fn merge_overwrites_and_adds_but_never_removes() {
        let mut style = map(&[("color", "red".into()), ("size", 10.into())]);

        let changed = style.merge(map(&[("color", "blue".into()), ("weight", 600.into())]));

        assert!(changed);
        assert_eq!(
            style,
            map(&[
                ("color", "blue".into()),
                ("size", 10.into()),
                ("weight", 600.into()),
            ])
        );
    }

    #[test]
    fn merge_reports_unchanged_for_identical_patch() {
        let mut style = map(&[("color", "red".into())]);
        assert!(!style.merge(map(&[("color", "red".into())])));
        assert!(!style.merge(StyleMap::new()));
    }

    #[test]
    fn merge_from_lets_other_win() {
        let mut base = map(&[("color", "red".into()), ("size", 10.into())]);
        let top = map(&[("color", "green".into())]);
        base.merge_from(&top);
        assert_eq!(base, map(&[("color", "green".into()), ("size", 10.into())]));

        let mut empty = StyleMap::new();
        empty.merge_from(&top);
        assert_eq!(empty, top);
    }

    #[test]
    fn remove_and_clear() {
        let mut style = map(&[("color", "red".into()), ("size", 10.into())]);
        assert_eq!(style.remove("size"), Some(AttrValue::from(10)));
        assert_eq!(style.remove("size"), None);
        assert!(style.clear());
        assert!(!style.clear());
        assert!(style.is_empty());
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut style = StyleMap::<u32>::new();
        for i in (0..32).rev() {
            style.insert(i, AttrValue::from(i));
        }
        assert_eq!(style.len(), 32);
        assert!(style.keys().copied().eq(0..32));
        assert_eq!(style.get(&17), Some(&AttrValue::from(17_u32)));
    }

    #[test]
    fn debug_renders_as_map() {
        let style = map(&[("color", "red".into())]);
        let debug = alloc::format!("{style:?}");
        assert_eq!(debug, r#"{"color": Str("red")}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_object() {
        let style = map(&[
            ("background", "black".into()),
            ("padding", 8.into()),
            ("opacity", 0.5.into()),
        ]);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"background":"black","opacity":0.5,"padding":8}"#);

        let back: StyleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
