// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading declared styles from JSON presets and cascading them.

use std::collections::BTreeMap;

use canopy_style::{AttrValue, StyleMap};
use canopy_tree::StyleRegistry;

const PRESETS: &str = r##"{
    "rootTheme": {
        "color": "#ffffff",
        "fontFamily": "Arial, sans-serif",
        "fontSize": "16px",
        "lineHeight": "1.6"
    },
    "navigationParent": {
        "position": "fixed",
        "zIndex": 1000,
        "fontSize": "1rem"
    },
    "buttonParent": {
        "borderRadius": "12px",
        "cursor": "pointer",
        "fontSize": "0.9rem"
    }
}"##;

fn load() -> StyleRegistry {
    let presets: BTreeMap<String, StyleMap> = serde_json::from_str(PRESETS).unwrap();
    let mut registry = StyleRegistry::new();
    for (name, declared) in presets {
        registry.create_element(&name, declared).unwrap();
    }
    registry.attach("navigationParent", "rootTheme").unwrap();
    registry.attach("buttonParent", "navigationParent").unwrap();
    registry
}

#[test]
fn presets_cascade_through_the_chain() {
    let registry = load();
    let button = registry.get_computed_style("buttonParent").unwrap();

    assert_eq!(button.get("color"), Some(&AttrValue::from("#ffffff")));
    assert_eq!(button.get("fontSize"), Some(&AttrValue::from("0.9rem")));
    assert_eq!(button.get("zIndex"), Some(&AttrValue::Int(1000)));
    assert_eq!(button.len(), 8);
}

#[test]
fn theme_update_reaches_every_descendant() {
    let mut registry = load();
    registry.update_parent_style("rootTheme", [("color".into(), "#000000".into())]);

    for name in ["rootTheme", "navigationParent", "buttonParent"] {
        assert_eq!(
            registry.get_computed_value(name, "color"),
            Some(&AttrValue::from("#000000")),
            "{name} should see the new theme color"
        );
    }
}

#[test]
fn computed_style_serializes_as_an_object() {
    let registry = load();
    let nav = registry.get_computed_style("navigationParent").unwrap();
    let json = serde_json::to_value(&nav).unwrap();

    assert_eq!(json["fontSize"], "1rem");
    assert_eq!(json["zIndex"], 1000);
    assert_eq!(json["fontFamily"], "Arial, sans-serif");
}
