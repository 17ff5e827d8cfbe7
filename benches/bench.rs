mod get;
mod insert;
mod remove;
mod visit;

use criterion::{criterion_group, criterion_main};
use redblack::RbTree;

criterion_main!(benches);
criterion_group!(benches, insert::bench, get::bench, remove::bench, visit::bench);

/// Linear-feedback shift register based PRNG.
///
/// Generates 65,535 unique values before cycling.
#[derive(Debug, Clone)]
pub struct Lfsr(u16);

impl Default for Lfsr {
    fn default() -> Self {
        Self(42)
    }
}

impl Lfsr {
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u16 {
        let lsb = self.0 & 1;
        self.0 >>= 1;
        if lsb == 1 {
            self.0 ^= 0xD008;
        }
        assert_ne!(self.0, 42, "LFSR rollover");
        self.0
    }
}

/// Build a tree of `n_values` unique keys drawn from a default [`Lfsr`],
/// returning it and the generator state after the last insert.
pub fn populated_tree(n_values: usize) -> (RbTree<u16, usize>, Lfsr) {
    let mut rand = Lfsr::default();
    let mut t = RbTree::new();

    for _i in 0..n_values {
        t.insert(rand.next(), 42_usize)
            .expect("LFSR yields unique keys");
    }

    (t, rand)
}
