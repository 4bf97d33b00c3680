//! # Monty Hall Simulator
//!
//! A Monte Carlo simulator for the Monty Hall problem: a player picks one of
//! three doors hiding a car and two goats, the host opens a non-winning door
//! among the other two, and the player may switch to the remaining door.
//! Running many independent trials shows empirically that switching wins
//! about 2/3 of the time while staying wins about 1/3.
//!
//! ## Features
//!
//! - **Faithful game model**: Implements the host's reveal-and-switch rule,
//!   not just the closed-form probabilities
//! - **Seedable randomness**: Every run is reproducible with a fixed seed
//! - **Batch runner**: Sequential by default, rayon-parallel for large runs
//! - **Per-door breakdowns**: Pick and winning-door distributions alongside
//!   the win/loss totals
//!
//! ## Quick Start
//!
//! ```
//! use monty_hall_sim::sim::{BatchRunner, SimConfig};
//!
//! let config = SimConfig::new(100_000).with_seed(42);
//! let runner = BatchRunner::new(config).unwrap();
//! let report = runner.run();
//!
//! // Always switching wins roughly two thirds of the time.
//! assert!(report.win_rate() > 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`game`]: The door arrangement model and the `MontyHall` simulator
//! - [`sim`]: Batch configuration, runner, and report formatting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 BatchRunner                     │
//! │  - trial loop (sequential or rayon chunks)      │
//! │  - tally accumulation    - Report merging       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        │ drives, one trial at a time
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │                  MontyHall                      │
//! │  - arrangement draw      - switch rule          │
//! │  - random door pick      - win determination    │
//! └─────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

/// Core game model: doors, prizes, arrangements, and the simulator.
pub mod game;

/// Batch simulation: configuration, runner, and reporting.
pub mod sim;

// Re-export commonly used types at crate root for convenience
pub use game::{Arrangement, Door, MontyHall, Prize, TrialOutcome};
pub use sim::{BatchRunner, ConfigError, Report, SimConfig, SimStats};
