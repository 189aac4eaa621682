// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dimlens_axis::build_axis;
use dimlens_value::{Dimension, DimensionKind, Node};

fn nodes(len: usize) -> Vec<Node> {
    (0..len)
        .map(|i| {
            Node::new(format!("n{i}"), format!("Node {i}"))
                .with("size", (i as f64).sqrt())
                .with("tag", format!("Tag{}", i % 64))
                .with("at", 1_600_000_000_000_i64 + (i as i64) * 60_000)
        })
        .collect()
}

fn bench_build_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/build");
    let dimensions = [
        Dimension::new("size", "Size", DimensionKind::Numeric),
        Dimension::new("tag", "Tag", DimensionKind::Categorical),
        Dimension::new("at", "At", DimensionKind::Datetime),
    ];

    for len in [1_000usize, 10_000, 100_000] {
        let nodes = nodes(len);
        group.throughput(Throughput::Elements(len as u64));
        for dimension in &dimensions {
            group.bench_with_input(
                BenchmarkId::new(dimension.kind.as_str(), len),
                &nodes,
                |b, nodes| b.iter(|| black_box(build_axis(dimension, nodes))),
            );
        }
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/normalize");
    let nodes = nodes(10_000);
    group.throughput(Throughput::Elements(nodes.len() as u64));

    for id in ["size", "tag"] {
        let kind = if id == "size" {
            DimensionKind::Numeric
        } else {
            DimensionKind::Categorical
        };
        let axis = build_axis(&Dimension::new(id, id, kind), &nodes);
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                let sum: f64 = nodes.iter().map(|n| axis.normalize(n.value(id))).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_axis, bench_normalize);
criterion_main!(benches);
