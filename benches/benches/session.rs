// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use dimlens_explorer::{Dataset, Explorer};
use dimlens_filter::NumericFilter;
use dimlens_value::{Dimension, DimensionKind, Node};

fn dataset(len: usize) -> Dataset {
    let nodes = (0..len)
        .map(|i| {
            Node::new(format!("n{i}"), format!("Node {i}"))
                .with("x", (i % 1_000) as f64)
                .with("y", ((i * 31) % 977) as f64)
        })
        .collect();
    Dataset::new(
        nodes,
        vec![
            Dimension::new("x", "X", DimensionKind::Numeric),
            Dimension::new("y", "Y", DimensionKind::Numeric),
        ],
    )
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer");
    let mut base = Explorer::new(dataset(20_000));
    base.toggle_dimension("x");
    base.toggle_dimension("y");

    // Node selection leaves the filter inputs untouched, so this measures the
    // cached path.
    group.bench_function("select_node_cached", |b| {
        let mut explorer = base.clone();
        let mut i = 0_usize;
        b.iter(|| {
            i = (i + 1) % 20_000;
            let id = format!("n{i}");
            explorer.select_node(Some(id.as_str()));
            black_box(explorer.selection().selected_node().is_some())
        });
    });

    group.bench_function("set_filter", |b| {
        b.iter_batched(
            || base.clone(),
            |mut explorer| {
                explorer.set_filter("x", NumericFilter::between(100.0, 600.0).into());
                black_box(explorer)
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("scatter_view", |b| {
        b.iter(|| black_box(base.scatter_view().map(|v| v.points.len())));
    });

    group.finish();
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
