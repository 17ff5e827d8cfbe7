//! Build a small tree of ascending keys, remove a handful of them, and write
//! the resulting structure to `rbt_graph.dot`.
//!
//! Render it with `dot -Tpng rbt_graph.dot -o rbt_graph.png`.

use std::error::Error;

use log::{info, LevelFilter};
use redblack::RbTree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut t = RbTree::new();
    for k in 1..=16_u32 {
        t.insert(k, k * 100).map_err(|e| format!("{e}: {}", e.key))?;
    }
    info!("inserted {} keys, black height {}", t.len(), t.validate()?);

    for k in [1, 12, 2, 16, 8, 9, 7, 6, 13, 4] {
        let (key, value) = t.remove(&k).ok_or("key missing from tree")?;
        info!("removed {key} => {value}");
    }

    info!("remaining: {t:?}");
    info!("smallest value {}, largest value {}", t.minimum(), t.maximum());

    std::fs::write("rbt_graph.dot", t.dot(|k| k.to_string()).to_string())?;
    info!("wrote rbt_graph.dot");

    Ok(())
}
