// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar attribute values.
//!
//! This module provides [`AttrValue`], the payload stored for every attribute
//! in a [`StyleMap`](crate::StyleMap).

use alloc::string::String;
use core::fmt;

/// A scalar attribute value.
///
/// Attribute values are untyped payloads as far as the cascade is concerned:
/// the engine never inspects them beyond equality. Values are scalars or
/// strings, there are no nested structures.
///
/// # Example
///
/// ```rust
/// use canopy_style::AttrValue;
///
/// let color = AttrValue::from("#ffffff");
/// let z = AttrValue::from(1000);
/// let opacity = AttrValue::from(0.5);
///
/// assert_eq!(color.as_str(), Some("#ffffff"));
/// assert_eq!(z.as_int(), Some(1000));
/// assert_eq!(opacity.as_float(), Some(0.5));
/// assert_eq!(z.as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer, e.g. a z-index or a unitless pixel count.
    Int(i64),
    /// A floating point number, e.g. an opacity or a flex factor.
    Float(f64),
    /// A string, e.g. `"1rem 2rem"` or `"#dc2626"`.
    Str(String),
}

impl AttrValue {
    /// Returns the string payload, if this is a [`AttrValue::Str`].
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is a [`AttrValue::Int`].
    #[must_use]
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric payload as `f64`.
    ///
    /// Integers are widened; strings and booleans return `None`.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a [`AttrValue::Bool`].
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}
