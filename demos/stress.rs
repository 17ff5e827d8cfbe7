//! Insert 100,000 random keys (duplicates are rejected), then remove 20,000
//! random keys (absent keys are no-ops), and verify the tree remains a valid
//! red-black tree throughout.

use std::{collections::HashSet, error::Error, time::Instant};

use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use redblack::RbTree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const N_INSERTS: usize = 100_000;
const N_REMOVES: usize = 20_000;
const KEY_MAX: u64 = 100_000;

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let seed = std::env::args()
        .nth(1)
        .map(|v| v.parse::<u64>())
        .transpose()?
        .unwrap_or(42);
    info!("using seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut t = RbTree::new();
    let mut present = HashSet::new();
    let mut duplicates = 0;

    let start = Instant::now();
    for _ in 0..N_INSERTS {
        let key = rng.gen_range(1..=KEY_MAX);
        match t.insert(key, key.wrapping_mul(2)) {
            Ok(()) => {
                present.insert(key);
            }
            Err(_) => duplicates += 1,
        }
    }
    info!(
        "inserted {} keys ({duplicates} duplicates rejected) in {:?}",
        t.len(),
        start.elapsed()
    );

    let black_height = t.validate()?;
    info!("tree is valid with black height {black_height}");

    let distinct = present.len();
    let mut removed = 0;
    let mut absent = 0;
    let start = Instant::now();
    for _ in 0..N_REMOVES {
        let key = rng.gen_range(1..=KEY_MAX);
        match t.remove(&key) {
            Some((k, v)) => {
                assert_eq!(v, k.wrapping_mul(2));
                present.remove(&k);
                removed += 1;
            }
            None => {
                assert!(!present.contains(&key));
                absent += 1;
            }
        }
    }
    info!(
        "removed {removed} keys ({absent} absent) in {:?}",
        start.elapsed()
    );

    let black_height = t.validate()?;
    info!(
        "{} keys remain, tree is valid with black height {black_height}",
        t.len()
    );

    assert_eq!(t.len(), distinct - removed);
    for key in 1..=KEY_MAX {
        assert_eq!(t.contains_key(&key), present.contains(&key));
    }
    info!("membership verified for all {KEY_MAX} possible keys");

    Ok(())
}
