//! Precompute and print the D9 power-loss table for intra-system travel.
//!
//! Default: skills 20..=100 step 10 by distances 2..10, 50000 cruises per cell.
//! With `--inspect SKILL DISTANCE`, prints one cell's histogram instead.

use travel_tables::config::TableConfig;
use travel_tables::env_config::{init_rayon_threads, init_tracing};
use travel_tables::format::{render_cell, render_table};
use travel_tables::table::{assemble, simulate_cell};

struct Args {
    config: TableConfig,
    inspect: Option<(i32, u32)>,
    json: bool,
}

const USAGE: &str = "Usage: travel-table [--config FILE] [--samples N] [--seed S] \
[--skill-min N] [--skill-max N] [--skill-step N] [--distance-min N] [--distance-max N] \
[--inspect SKILL DISTANCE] [--json]";

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i) else {
        eprintln!("Missing value for {}", flag);
        std::process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();

    // The config file is the base layer; flags override it regardless of order.
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(pos) => {
            let Some(path) = args.get(pos + 1) else {
                eprintln!("Missing value for --config");
                std::process::exit(1);
            };
            TableConfig::load(path).unwrap_or_else(|e| {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            })
        }
        None => TableConfig::default(),
    };
    let mut inspect = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
            }
            "--samples" => {
                i += 1;
                config.sample_count = parse_value(&args, i, "--samples");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--skill-min" => {
                i += 1;
                config.skill_range.min = parse_value(&args, i, "--skill-min");
            }
            "--skill-max" => {
                i += 1;
                config.skill_range.max = parse_value(&args, i, "--skill-max");
            }
            "--skill-step" => {
                i += 1;
                config.skill_range.step = parse_value(&args, i, "--skill-step");
            }
            "--distance-min" => {
                i += 1;
                config.distance_range.min = parse_value(&args, i, "--distance-min");
            }
            "--distance-max" => {
                i += 1;
                config.distance_range.max = parse_value(&args, i, "--distance-max");
            }
            "--inspect" => {
                let skill = parse_value(&args, i + 1, "--inspect");
                let distance = parse_value(&args, i + 2, "--inspect");
                inspect = Some((skill, distance));
                i += 2;
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --config FILE       JSON run parameters (flags override)");
                println!("  --samples N         Cruises simulated per cell (default: 50000)");
                println!("  --seed S            Master RNG seed (default: 42)");
                println!("  --skill-min N       First skill row (default: 20)");
                println!("  --skill-max N       Last skill row, inclusive (default: 100)");
                println!("  --skill-step N      Skill row step (default: 10)");
                println!("  --distance-min N    First distance column (default: 2)");
                println!("  --distance-max N    Distance column bound, exclusive (default: 10)");
                println!("  --inspect S D       Print the histogram of one cell");
                println!("  --json              With --inspect, print the cell as JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        config,
        inspect,
        json,
    }
}

fn main() {
    let args = parse_args();
    init_tracing();
    let num_threads = init_rayon_threads();
    tracing::info!(threads = num_threads, "worker pool ready");

    if let Err(e) = args.config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Some((skill, distance)) = args.inspect {
        let cell = simulate_cell(&args.config, skill, distance).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
        if args.json {
            match serde_json::to_string_pretty(&cell) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Failed to serialize cell: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            print!("{}", render_cell(&cell));
        }
        return;
    }

    match assemble(&args.config) {
        Ok(table) => print!("{}", render_table(&table)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
