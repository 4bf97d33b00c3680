//! Monty Hall simulation binary.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --trials <N>         Number of games to simulate (default: 10000)
//!   --stay               Player keeps the initial pick (default: always switch)
//!   --both               Run both strategies and print both reports
//!   --quiet              Skip the per-door pick/win breakdowns
//!   --seed <N>           Random seed for reproducible runs (optional)
//!   --threads <N>        Number of rayon workers, 0 = all cores (default: sequential)
//!   --config <FILE>      Configuration JSON file (optional)

use std::env;
use std::process;
use std::time::Duration;

use indicatif::ProgressBar;

use monty_hall_sim::sim::{BatchRunner, Report, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut config_file: Option<String> = None;
    let mut trials: Option<u64> = None;
    let mut stay = false;
    let mut both = false;
    let mut quiet = false;
    let mut seed: Option<u64> = None;
    let mut threads: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--trials" | "-n" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().ok();
                }
            }
            "--stay" => {
                stay = true;
            }
            "--both" | "-b" => {
                both = true;
            }
            "--quiet" | "-q" => {
                quiet = true;
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().ok();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Monty Hall Simulator");
    println!("=================================================");
    println!();

    // Load or build configuration
    let mut config = if let Some(path) = &config_file {
        println!("Loading configuration from: {}", path);
        match SimConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        }
    } else {
        SimConfig::default()
    };

    // Command-line flags override the config file
    if let Some(n) = trials {
        config = config.with_trials(n);
    }
    if stay {
        config = config.with_stay();
    }
    if quiet {
        config = config.quiet();
    }
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
    if let Some(t) = threads {
        config = config.with_threads(t);
    }

    println!("Games: {}", config.trials);
    match config.num_threads {
        None | Some(1) => println!("Mode: sequential"),
        Some(0) => println!("Mode: parallel (all cores)"),
        Some(t) => println!("Mode: parallel ({} workers)", t),
    }
    if let Some(s) = config.seed {
        println!("Seed: {}", s);
    }
    println!();

    if both {
        let switch_report = run_batch(config.clone().with_switch(true));
        let stay_report = run_batch(config.with_switch(false));
        print_report(&switch_report);
        println!();
        print_report(&stay_report);
        println!();
        println!(
            "Switching won {:.2}% vs {:.2}% for staying.",
            switch_report.win_rate(),
            stay_report.win_rate()
        );
    } else {
        let report = run_batch(config);
        print_report(&report);
    }
}

/// Run one batch with a spinner while the trials are in flight.
fn run_batch(config: SimConfig) -> Report {
    let runner = match BatchRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let strategy = if runner.config().switch { "switch" } else { "stay" };
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Simulating {} games ({})...",
        runner.config().trials,
        strategy
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let report = runner.run();
    spinner.finish_and_clear();
    report
}

fn print_report(report: &Report) {
    print!("{}", report);
    println!(
        "Elapsed: {:.3}s ({:.0} games/s)",
        report.stats.elapsed_seconds, report.stats.trials_per_second
    );
}

fn print_help() {
    println!("Monty Hall Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --trials, -n <N>     Number of games to simulate (default: 10000)");
    println!("  --stay               Player keeps the initial pick (default: always switch)");
    println!("  --both, -b           Run both strategies and print both reports");
    println!("  --quiet, -q          Skip the per-door pick/win breakdowns");
    println!("  --seed, -s <N>       Random seed for reproducible runs");
    println!("  --threads, -t <N>    Number of rayon workers, 0 = all cores");
    println!("  --config, -c <FILE>  Configuration JSON file");
    println!("  --help, -h           Show this help message");
}
