// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the `overstory_plastic` widget lifecycle.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use overstory_plastic::{Config, PlasticContext};
use understory_dom::NodeId;

fn with_input(kind: &str) -> (PlasticContext, NodeId) {
    let mut cx = PlasticContext::new();
    let doc = cx.document_mut();
    let input = doc.create_element("input");
    doc.set_attr(input, "type", kind);
    doc.set_attr(input, "value", "seed");
    let root = doc.root();
    let _ = doc.append_child(root, input);
    (cx, input)
}

fn with_select(options: usize) -> (PlasticContext, NodeId) {
    let mut cx = PlasticContext::new();
    let doc = cx.document_mut();
    let select = doc.create_element("select");
    let root = doc.root();
    let _ = doc.append_child(root, select);
    for i in 0..options {
        let option = doc.create_element("option");
        let value = format!("v{i}");
        doc.set_attr(option, "value", &value);
        doc.set_text(option, &value);
        let _ = doc.append_child(select, option);
    }
    (cx, select)
}

fn plastic_lifecycle(c: &mut Criterion) {
    let config = Config::default();

    let mut group = c.benchmark_group("plastic/transform_restore");
    for kind in ["text", "checkbox", "file"] {
        group.bench_function(kind, |b| {
            b.iter_batched(
                || with_input(kind),
                |(mut cx, input)| {
                    if let Ok(id) = cx.transform(input, &config) {
                        black_box(cx.restore(id).ok());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    for options in [8_usize, 128] {
        group.bench_function(BenchmarkId::new("select", options), |b| {
            b.iter_batched(
                || with_select(options),
                |(mut cx, select)| {
                    if let Ok(id) = cx.transform(select, &config) {
                        black_box(cx.restore(id).ok());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("plastic/value");

    group.bench_function("native_input", |b| {
        let (cx, input) = with_input("text");
        b.iter(|| black_box(cx.val(input).ok()))
    });

    group.bench_function("wrapper_hook", |b| {
        let (mut cx, input) = with_input("text");
        let wrapper = cx
            .transform(input, &config)
            .ok()
            .and_then(|id| cx.instance(id).ok().map(|w| w.wrapper()));
        b.iter(|| wrapper.map(|w| black_box(cx.val(w).ok())))
    });

    group.bench_function("select_set_by_text", |b| {
        let (mut cx, select) = with_select(128);
        let wrapper = cx
            .transform(select, &config)
            .ok()
            .and_then(|id| cx.instance(id).ok().map(|w| w.wrapper()));
        b.iter(|| {
            if let Some(w) = wrapper {
                black_box(cx.set_val(w, "v100").ok());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, plastic_lifecycle);
criterion_main!(benches);
