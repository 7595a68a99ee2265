// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_hooks` routing.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_hooks::{AccessorKind, Handlers, HookSubject, HooksManager, Predicate};

/// Flat list of element tags; node ids index into it.
struct Tags(Vec<u32>);

impl HookSubject<usize> for Tags {
    type Selector = u32;

    fn is(&self, node: usize, tag: &u32) -> bool {
        self.0.get(node) == Some(tag)
    }
}

type Hooks = HooksManager<Tags, usize, u64>;

fn hooks(c: &mut Criterion) {
    let tags = Tags((0..64).collect());

    let mut group = c.benchmark_group("hooks/get");

    group.bench_function("core_only", |b| {
        let mut hooks = Hooks::new();
        hooks
            .registry_mut(AccessorKind::Value)
            .install_core("input", Handlers::new().with_get(|_, n| Some(n as u64)));
        let values = hooks.value();
        b.iter(|| black_box(values.get(&tags, "input", black_box(7))))
    });

    group.bench_function("unrouted", |b| {
        let hooks = Hooks::new();
        let values = hooks.value();
        b.iter(|| black_box(values.get(&tags, "input", black_box(7))))
    });

    // The matching hook sits at the bottom of the chain, so every other
    // predicate is tested first.
    for depth in [1_u32, 8, 32] {
        group.bench_function(BenchmarkId::new("static_miss_chain", depth), |b| {
            let mut hooks = Hooks::new();
            let values = hooks.registry_mut(AccessorKind::Value);
            values.install_core("input", Handlers::new().with_get(|_, _| Some(0)));
            values.register(
                "input",
                Predicate::Static(7),
                Handlers::new().with_get(|_, n| Some(n as u64 * 2)),
            );
            for tag in 0..depth {
                values.register(
                    "input",
                    Predicate::Static(100 + tag),
                    Handlers::new().with_get(|_, _| Some(1)),
                );
            }
            let values = hooks.value();
            b.iter(|| black_box(values.get(&tags, "input", black_box(7))))
        });
    }

    group.bench_function("dynamic", |b| {
        let mut hooks = Hooks::new();
        hooks.registry_mut(AccessorKind::Value).register(
            "input",
            Predicate::dynamic(|tags: &Tags, n| tags.0[n] % 2 == 1),
            Handlers::new().with_get(|_, n| Some(n as u64)),
        );
        let values = hooks.value();
        b.iter(|| black_box(values.get(&tags, "input", black_box(7))))
    });

    group.finish();

    let mut group = c.benchmark_group("hooks/churn");

    group.bench_function("register_unregister", |b| {
        let mut hooks = Hooks::new();
        hooks
            .registry_mut(AccessorKind::Value)
            .install_core("input", Handlers::new().with_get(|_, _| Some(0)));
        b.iter(|| {
            let values = hooks.registry_mut(AccessorKind::Value);
            let handle = values.register(
                "input",
                Predicate::Static(3),
                Handlers::new().with_get(|_, _| Some(1)),
            );
            if let Some(handle) = handle {
                black_box(values.unregister(&handle));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, hooks);
criterion_main!(benches);
