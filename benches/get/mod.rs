use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use redblack::RbTree;

use crate::{populated_tree, Lfsr};

#[derive(Debug, Clone, Copy)]
struct BenchName {
    op: &'static str,
    bench: &'static str,
    n_values: usize,
    n_lookups: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(
            format!("{}/{}_values_{}_n_lookups", v.op, v.n_values, v.bench),
            v.n_lookups,
        )
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("get");

    // Tree size
    for n_values in [1_000, 10_000] {
        // Number of key lookups
        for n_lookups in [100, 1_000] {
            // The tree must be at least as big as the number of lookups.
            assert!(n_values >= n_lookups);

            let (t, rand) = populated_tree(n_values);

            bench_get(&mut g, &t, &rand, n_values, n_lookups);
            bench_contains_key(&mut g, &t, &rand, n_values, n_lookups);
        }
    }
}

/// Generate a benchmark function for the lookup method `$op`, measuring
/// `n_lookups` that all miss (continuing the LFSR sequence used to populate
/// the tree), and `n_lookups` that all hit (replaying it).
macro_rules! lookup_bench {
    (
        $op:ident
    ) => {
        paste::paste! {
            fn [<bench_ $op>]<M>(
                g: &mut BenchmarkGroup<'_, M>,
                t: &RbTree<u16, usize>,
                rand: &Lfsr,
                n_values: usize,
                n_lookups: usize,
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    op: stringify!($op),
                    bench: "misses",
                    n_values,
                    n_lookups,
                };

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        // Provide the LFSR state after inserting n_values.
                        //
                        // It will now generate n_lookups of different keys.
                        || rand.clone(),
                        |mut rand| {
                            let mut any_hit = false;
                            for _ in 0..n_lookups {
                                any_hit |= lookup_hit(t.$op(&rand.next()));
                            }
                            assert!(!any_hit)
                        },
                        BatchSize::SmallInput,
                    )
                });

                let bench_name = BenchName {
                    op: stringify!($op),
                    bench: "hits",
                    n_values,
                    n_lookups,
                };

                g.throughput(Throughput::Elements(n_lookups as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        // Reset the LFSR to replay the inserted keys.
                        Lfsr::default,
                        |mut rand| {
                            let mut all_hit = true;
                            for _ in 0..n_lookups {
                                all_hit &= lookup_hit(t.$op(&rand.next()));
                            }
                            assert!(all_hit);
                        },
                        BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

/// Normalise the result of the lookup methods into a hit/miss signal.
trait LookupHit {
    fn hit(self) -> bool;
}

impl LookupHit for bool {
    fn hit(self) -> bool {
        self
    }
}

impl<T> LookupHit for Option<T> {
    fn hit(self) -> bool {
        self.is_some()
    }
}

fn lookup_hit(v: impl LookupHit) -> bool {
    v.hit()
}

lookup_bench!(get);
lookup_bench!(contains_key);
