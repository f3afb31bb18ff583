//! Command-line demo: build a grid, pick endpoints, print a shortest path.
//!
//! Run: cargo run --bin tilepath-demo -- --width 30 --height 15 --seed 7 --show-grid
//! Set `RUST_LOG=debug` to see search statistics.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilepath_demos::{Args, build_scenario, format_grid, format_path};
use tilepath_paths::Pathfinder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::try_from_rng(&mut rand::rngs::SysRng).expect("OS entropy unavailable"),
    };
    let scenario = build_scenario(&args, &mut rng)?;

    let pathfinder = Pathfinder::new(args.search_config());
    let outcome = pathfinder.search(&scenario.grid, scenario.start, scenario.end)?;
    log::info!(
        "{} after {} expansions",
        if outcome.is_found() { "found" } else { "no path" },
        outcome.expanded()
    );
    let path = outcome.into_path();

    if args.show_grid {
        let drawn = format_grid(&scenario.grid, &path, scenario.start, scenario.end);
        print!("{drawn}");
    }
    print!("{}", format_path(&path));
    Ok(())
}
