//! Find the least-cost route across an ASCII cost map.
//!
//! ```text
//! cargo run --bin route -- demos/maps/marsh.txt
//! RUST_LOG=trace cargo run --bin route -- demos/maps/wall_gap.txt --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use wayfind_paths::{COST_LIMIT, Pathfinder, SearchConfig};

/// Least-cost routing over an ASCII cost map.
///
/// Map glyphs: `.` free, `0`-`9` that cost, `#` impassable, `S` start,
/// `F` finish.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the map file.
    map: PathBuf,

    /// Prune partial routes whose cost reaches this value.
    #[arg(long, default_value_t = COST_LIMIT)]
    cost_limit: f32,

    /// Print the result as JSON instead of a drawing.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.map)?;
    let finder = Pathfinder::new(SearchConfig::default().with_cost_limit(args.cost_limit));
    let (map, summary) = wayfind_demos::run(&text, &finder)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render(&map));
    }
    Ok(())
}
