//! Batch simulation module.
//!
//! This module turns single trials from [`crate::game`] into statistics:
//!
//! 1. [`SimConfig`] says how many trials to run, which strategy the player
//!    follows, and whether to record per-door detail
//! 2. [`BatchRunner`] executes the batch, sequentially or across rayon
//!    workers with independent RNG streams
//! 3. [`Report`] accumulates the tallies and formats the final summary
//!
//! # Usage
//!
//! ```
//! use monty_hall_sim::sim::{BatchRunner, SimConfig};
//!
//! let config = SimConfig::new(10_000).with_seed(42).with_stay();
//! let report = BatchRunner::new(config).unwrap().run();
//!
//! // Staying wins roughly one third of the time.
//! assert!(report.win_rate() < 40.0);
//! println!("{}", report);
//! ```
//!
//! Each run is self-contained: no state persists between batches beyond the
//! configuration itself.

pub mod config;
pub mod report;
pub mod runner;

// Re-export main types for convenient access
pub use config::{ConfigError, SimConfig, SimStats};
pub use report::{percent_of, DoorTally, Report};
pub use runner::BatchRunner;
