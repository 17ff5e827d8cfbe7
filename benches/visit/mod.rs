use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use redblack::RbTree;

use crate::populated_tree;

#[derive(Debug)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("visit");

    for n_values in [1, 100, 1_000, 10_000] {
        let (t, _) = populated_tree(n_values);
        bench_param(&mut g, n_values, &t)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, t: &RbTree<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName { n_values };

    g.throughput(Throughput::Elements(n_values as _)); // Entries per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            t.visit(|k, v| {
                black_box((k, v));
            })
        })
    });
}
