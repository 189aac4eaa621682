// Copyright 2025 the Dimlens Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dimlens_filter::{CategoricalFilter, DatetimeFilter, FilterSet, NumericFilter, filter_indices};
use dimlens_value::{NaiveDate, Node};

const COLORS: [&str; 5] = ["red", "green", "blue", "amber", "violet"];

fn nodes(len: usize) -> Vec<Node> {
    (0..len)
        .map(|i| {
            let node = Node::new(format!("n{i}"), format!("Node {i}"))
                .with("size", (i % 997) as f64)
                .with("color", COLORS[i % COLORS.len()]);
            // Every seventh node has no date at all.
            if i % 7 == 0 {
                node
            } else {
                node.with("born", format!("2020-{:02}-{:02}", i % 12 + 1, i % 28 + 1))
            }
        })
        .collect()
}

fn bench_filter_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/indices");
    let selected = ["size", "born"];

    for len in [1_000usize, 10_000, 100_000] {
        let nodes = nodes(len);
        group.throughput(Throughput::Elements(len as u64));

        let mut numeric = FilterSet::new();
        numeric.insert("size", NumericFilter::between(100.0, 500.0).into());
        group.bench_with_input(BenchmarkId::new("numeric", len), &nodes, |b, nodes| {
            b.iter(|| black_box(filter_indices(nodes, &numeric, &selected)));
        });

        // Date bounds parse every value, which dominates this case.
        let mut datetime = FilterSet::new();
        datetime.insert(
            "born",
            DatetimeFilter {
                start: NaiveDate::from_ymd_opt(2020, 3, 1),
                end: NaiveDate::from_ymd_opt(2020, 9, 30),
            }
            .into(),
        );
        group.bench_with_input(BenchmarkId::new("datetime", len), &nodes, |b, nodes| {
            b.iter(|| black_box(filter_indices(nodes, &datetime, &selected)));
        });

        let mut categorical = FilterSet::new();
        categorical.insert("color", CategoricalFilter::new(["red", "blue"]).into());
        group.bench_with_input(BenchmarkId::new("categorical", len), &nodes, |b, nodes| {
            b.iter(|| black_box(filter_indices(nodes, &categorical, &["color"])));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_indices);
criterion_main!(benches);
