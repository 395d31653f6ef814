// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `canopy_tree` resolution and mutation.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use canopy_notify::Discard;
use canopy_style::{AttrValue, StyleMap};
use canopy_tree::{NodeId, StyleNode, StyleRegistry};

const ATTRIBUTES: [&str; 8] = [
    "color",
    "background",
    "fontFamily",
    "fontSize",
    "lineHeight",
    "padding",
    "margin",
    "borderRadius",
];

/// A single chain `n0 <- n1 <- ... <- n{depth-1}`; every node declares one
/// attribute, the root declares all of them.
fn chain(depth: usize) -> StyleRegistry<String, Discard> {
    let mut registry = StyleRegistry::with_sink(Discard);
    let root: StyleMap = ATTRIBUTES
        .iter()
        .map(|k| (String::from(*k), AttrValue::from("root")))
        .collect();
    registry.create_element("n0", root).unwrap();
    for i in 1..depth {
        let key = ATTRIBUTES[i % ATTRIBUTES.len()];
        registry
            .create_child(
                &format!("n{i}"),
                &format!("n{}", i - 1),
                [(String::from(key), AttrValue::Int(i as i64))],
            )
            .unwrap();
    }
    registry
}

fn bench_resolve(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: StyleNode={} StyleMap={} AttrValue={} NodeId={}",
            core::mem::size_of::<StyleNode>(),
            core::mem::size_of::<StyleMap>(),
            core::mem::size_of::<AttrValue>(),
            core::mem::size_of::<NodeId>(),
        );
    });

    let mut group = c.benchmark_group("cascade/resolve");
    for depth in [1_usize, 4, 16, 64] {
        let registry = chain(depth);
        let leaf = format!("n{}", depth - 1);

        group.bench_function(BenchmarkId::new("computed_style", depth), |b| {
            b.iter(|| black_box(registry.get_computed_style(black_box(&leaf))));
        });

        // Near the leaf `margin` is unset, so lookups walk toward the root.
        group.bench_function(BenchmarkId::new("computed_value", depth), |b| {
            b.iter(|| black_box(registry.get_computed_value(black_box(&leaf), "margin")));
        });
    }
    group.finish();
}

fn bench_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade/mutate");

    group.bench_function("update_parent_style", |b| {
        let mut registry = chain(16);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            black_box(
                registry.update_parent_style("n0", [(String::from("color"), AttrValue::Bool(flip))]),
            )
        });
    });

    group.bench_function("override_then_reset", |b| {
        let mut registry = chain(16);
        b.iter(|| {
            registry
                .override_child_style("n15", [(String::from("color"), AttrValue::from("red"))]);
            black_box(registry.reset_child_overrides("n15"))
        });
    });

    group.bench_function("reattach_subtree", |b| {
        b.iter_batched(
            || {
                let mut registry = chain(16);
                registry.create_element("other", []).unwrap();
                registry
            },
            |mut registry| {
                registry.attach("n8", "other").unwrap();
                black_box(registry)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("create_and_unregister", |b| {
        let mut registry = chain(16);
        b.iter(|| {
            registry.create_child("tmp", "n15", []).unwrap();
            black_box(registry.unregister("tmp"))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_mutate);
criterion_main!(benches);
