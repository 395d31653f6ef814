// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The documented vocabulary of recognized attribute keys.
//!
//! The cascade itself is agnostic to attribute names. Consumers that want the
//! type system to check keys can use [`Attribute`] as the key type of a
//! [`StyleMap`](crate::StyleMap), or convert it into the open `String`
//! vocabulary with `String::from`.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Broad category of an [`Attribute`], used by consumers for grouping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeGroup {
    /// Box sizes.
    Layout,
    /// Positioning and stacking.
    Position,
    /// Display and flexbox.
    Flex,
    /// Colors and backgrounds.
    Color,
    /// Fonts and text.
    Typography,
    /// Borders and corners.
    Border,
    /// Shadows, transforms, transitions and pointer behavior.
    Effect,
    /// Per-side padding and margin.
    Spacing,
}

macro_rules! attributes {
    ($( $variant:ident => $name:literal, $group:ident; )*) => {
        /// A recognized style attribute.
        ///
        /// Names are the camelCase spellings used by the rendering layer.
        ///
        /// # Example
        ///
        /// ```rust
        /// use canopy_style::{Attribute, AttributeGroup};
        ///
        /// let attr: Attribute = "fontSize".parse().unwrap();
        /// assert_eq!(attr, Attribute::FontSize);
        /// assert_eq!(attr.name(), "fontSize");
        /// assert_eq!(attr.group(), AttributeGroup::Typography);
        /// assert!(Attribute::from_name("font-size").is_none());
        /// ```
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Attribute {
            $(
                #[doc = concat!("`", $name, "`")]
                #[cfg_attr(feature = "serde", serde(rename = $name))]
                $variant,
            )*
        }

        impl Attribute {
            /// Every recognized attribute, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the camelCase attribute name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the attribute's group.
            #[must_use]
            pub const fn group(self) -> AttributeGroup {
                match self {
                    $(Self::$variant => AttributeGroup::$group,)*
                }
            }

            /// Looks up an attribute by its camelCase name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

attributes! {
    Width => "width", Layout;
    Height => "height", Layout;
    MinWidth => "minWidth", Layout;
    MinHeight => "minHeight", Layout;
    MaxWidth => "maxWidth", Layout;
    MaxHeight => "maxHeight", Layout;
    BoxSizing => "boxSizing", Layout;
    Padding => "padding", Layout;
    Margin => "margin", Layout;

    Position => "position", Position;
    Top => "top", Position;
    Right => "right", Position;
    Bottom => "bottom", Position;
    Left => "left", Position;
    ZIndex => "zIndex", Position;

    Display => "display", Flex;
    FlexDirection => "flexDirection", Flex;
    JustifyContent => "justifyContent", Flex;
    AlignItems => "alignItems", Flex;
    FlexWrap => "flexWrap", Flex;
    Flex => "flex", Flex;
    FlexGrow => "flexGrow", Flex;
    FlexShrink => "flexShrink", Flex;
    FlexBasis => "flexBasis", Flex;
    Gap => "gap", Flex;

    Color => "color", Color;
    Background => "background", Color;
    BackgroundColor => "backgroundColor", Color;
    BackgroundImage => "backgroundImage", Color;
    BackgroundSize => "backgroundSize", Color;
    BackgroundPosition => "backgroundPosition", Color;
    BackgroundRepeat => "backgroundRepeat", Color;

    FontSize => "fontSize", Typography;
    FontWeight => "fontWeight", Typography;
    FontFamily => "fontFamily", Typography;
    TextAlign => "textAlign", Typography;
    TextDecoration => "textDecoration", Typography;
    TextTransform => "textTransform", Typography;
    TextShadow => "textShadow", Typography;
    LineHeight => "lineHeight", Typography;
    LetterSpacing => "letterSpacing", Typography;

    Border => "border", Border;
    BorderTop => "borderTop", Border;
    BorderRight => "borderRight", Border;
    BorderBottom => "borderBottom", Border;
    BorderLeft => "borderLeft", Border;
    BorderRadius => "borderRadius", Border;
    BorderWidth => "borderWidth", Border;
    BorderStyle => "borderStyle", Border;
    BorderColor => "borderColor", Border;
    BorderImage => "borderImage", Border;

    BoxShadow => "boxShadow", Effect;
    Opacity => "opacity", Effect;
    Transform => "transform", Effect;
    Transition => "transition", Effect;
    Animation => "animation", Effect;
    BackdropFilter => "backdropFilter", Effect;
    Cursor => "cursor", Effect;
    UserSelect => "userSelect", Effect;

    PaddingTop => "paddingTop", Spacing;
    PaddingRight => "paddingRight", Spacing;
    PaddingBottom => "paddingBottom", Spacing;
    PaddingLeft => "paddingLeft", Spacing;
    MarginTop => "marginTop", Spacing;
    MarginRight => "marginRight", Spacing;
    MarginBottom => "marginBottom", Spacing;
    MarginLeft => "marginLeft", Spacing;
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Attribute> for String {
    fn from(attr: Attribute) -> Self {
        attr.name().into()
    }
}

/// Error returned when parsing an unrecognized attribute name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAttribute {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized style attribute {:?}", self.name)
    }
}

impl core::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownAttribute { name: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleMap;
    use alloc::string::ToString;

    #[test]
    fn names_round_trip_for_every_attribute() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_name(attr.name()), Some(*attr));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: alloc::vec::Vec<_> = Attribute::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate attribute name");
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "fontsize".parse::<Attribute>().unwrap_err();
        assert_eq!(err.name, "fontsize");
        assert!(err.to_string().contains("fontsize"));
    }

    #[test]
    fn closed_key_style_map() {
        let style: StyleMap<Attribute> = StyleMap::new()
            .with(Attribute::Color, "#ffffff")
            .with(Attribute::ZIndex, 1000);

        assert_eq!(style.get(&Attribute::ZIndex).and_then(|v| v.as_int()), Some(1000));
        assert!(!style.contains_key(&Attribute::Opacity));
    }

    #[test]
    fn converts_into_open_vocabulary() {
        let style: StyleMap = StyleMap::new().with(Attribute::FontFamily, "Arial, sans-serif");
        assert!(style.contains_key("fontFamily"));
        assert_eq!(Attribute::FontFamily.to_string(), "fontFamily");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&Attribute::BorderRadius).unwrap();
        assert_eq!(json, r#""borderRadius""#);

        let style: StyleMap<Attribute> =
            serde_json::from_str(r#"{"zIndex": 1000, "position": "fixed"}"#).unwrap();
        assert_eq!(style.get(&Attribute::Position).and_then(|v| v.as_str()), Some("fixed"));
    }
}
