//! Batch execution of independent Monty Hall trials.
//!
//! The simulation is embarrassingly parallel: every trial stands alone and
//! the aggregate is a sum of counts. [`BatchRunner`] therefore offers two
//! paths over the same per-trial code:
//!
//! - a strict sequential loop, the default;
//! - a rayon path that splits the trial count into one chunk per worker,
//!   runs each chunk with an independent RNG stream, and merges the partial
//!   reports additively.
//!
//! When a seed is set, chunk `i` derives its stream from `seed + i`, so
//! parallel runs are reproducible for a fixed chunk count.

use std::time::Instant;

use rayon::prelude::*;

use crate::game::MontyHall;
use crate::sim::config::{ConfigError, SimConfig};
use crate::sim::report::Report;

/// Runs a configured batch of trials and produces a [`Report`].
///
/// # Example
/// ```
/// use monty_hall_sim::sim::{BatchRunner, SimConfig};
///
/// let runner = BatchRunner::new(SimConfig::new(1_000).with_seed(1)).unwrap();
/// let report = runner.run();
/// assert_eq!(report.trials, 1_000);
/// ```
pub struct BatchRunner {
    config: SimConfig,
}

impl BatchRunner {
    /// Create a runner for the given configuration.
    ///
    /// Validates the configuration up front so a zero-trial batch is
    /// rejected before any simulation runs.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run the full batch and return the aggregate report.
    pub fn run(&self) -> Report {
        let start = Instant::now();
        let mut report = match self.config.num_threads {
            None | Some(1) => self.run_chunk(self.config.seed, self.config.trials),
            Some(threads) => self.run_parallel(threads),
        };
        report.stats.trials = report.trials;
        report.stats.elapsed_seconds = start.elapsed().as_secs_f64();
        report.stats.update_rate();
        report
    }

    /// Run `trials` trials sequentially on one RNG stream.
    fn run_chunk(&self, seed: Option<u64>, trials: u64) -> Report {
        let mut monty = match seed {
            Some(seed) => MontyHall::with_seed(seed),
            None => MontyHall::new(),
        };
        let mut report = Report::new(self.config.switch, self.config.verbose);
        for _ in 0..trials {
            let pick = monty.random_pick();
            let outcome = monty.play_trial(pick, self.config.switch);
            report.record(&outcome);
        }
        report
    }

    /// Run the batch across rayon workers, one chunk per worker.
    fn run_parallel(&self, threads: usize) -> Report {
        let workers = if threads == 0 {
            rayon::current_num_threads()
        } else {
            threads
        };
        let chunks = chunk_sizes(self.config.trials, workers);

        let partials: Vec<Report> = chunks
            .par_iter()
            .enumerate()
            .map(|(i, &trials)| {
                // Independent stream per chunk to avoid correlated draws.
                let seed = self.config.seed.map(|s| s.wrapping_add(i as u64));
                self.run_chunk(seed, trials)
            })
            .collect();

        let mut report = Report::new(self.config.switch, self.config.verbose);
        for partial in &partials {
            report.merge(partial);
        }
        report
    }
}

/// Split `trials` into `workers` chunks differing in size by at most one.
fn chunk_sizes(trials: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1) as u64;
    let workers = workers.min(trials); // never hand a worker zero trials
    let base = trials / workers;
    let remainder = trials % workers;
    (0..workers)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}
