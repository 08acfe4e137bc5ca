//! Campaign balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Full campaign, random seed
//!   cargo run --bin simulate -- -r 4           # Regions 1-4 only
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use std::env;

use runefall::simulator::{run_simulation, SimConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("Runefall balance simulator");
    println!();
    println!("Configuration:");
    println!("  Target region:  {}", config.target_region);
    println!("  Stars/battle:   {}", config.stars_per_battle);
    if let Some(seed) = config.seed {
        println!("  Seed:           {seed}");
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--region" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.target_region = value;
                }
                i += 2;
            }
            "--seed" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.seed = Some(value);
                }
                i += 2;
            }
            "--stars" => {
                if let Some(value) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                    config.stars_per_battle = value;
                }
                i += 2;
            }
            "-h" | "--help" => {
                println!("Usage: simulate [-r REGION] [--seed N] [--stars N] [--json]");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    config
}
