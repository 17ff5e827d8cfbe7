//! A string-keyed tree with a key disposal hook: every key removed through
//! `delete()` is reported as it is released.

use std::error::Error;

use log::{info, LevelFilter};
use redblack::RbTree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug)]
#[allow(dead_code)]
struct Shipmate {
    job: &'static str,
    combat_experience: u8,
    years_aboard: f32,
}

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut t = RbTree::with_hooks(
        |a: &String, b: &String| a.cmp(b),
        |name: String| info!("{name} has left the ship"),
    );

    for (name, job, combat_experience, years_aboard) in [
        ("Mal", "captain", 9, 6.0),
        ("Zoe", "first mate", 9, 6.0),
        ("Wash", "pilot", 1, 5.0),
        ("Inara", "companion", 2, 2.5),
        ("Jayne", "muscle", 8, 4.0),
        ("Kaylee", "mechanic", 0, 3.5),
        ("Simon", "medic", 1, 0.5),
        ("River", "passenger", 10, 0.5),
        ("Book", "shepherd", 7, 0.5),
    ] {
        t.insert(
            name.to_string(),
            Shipmate {
                job,
                combat_experience,
                years_aboard,
            },
        )
        .map_err(|e| format!("{e}: {}", e.key))?;
    }

    info!("the crew:");
    t.visit(|name, mate| info!("\t{name} ({})", mate.job));

    let wash = t.delete(&"Wash".to_string()).ok_or("Wash was never aboard")?;
    info!("{wash:?}");

    assert!(t.contains_key(&"Mal".to_string()));
    assert!(t.get(&"Ravageur".to_string()).is_none());

    info!("first crew member: {:?}", t.first_key_value().map(|(k, _)| k));
    info!("last crew member: {:?}", t.last_key_value().map(|(k, _)| k));

    t.destroy(|name, _mate| info!("{name} disembarks"));

    Ok(())
}
