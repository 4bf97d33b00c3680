//! Configuration options for the batch runner.
//!
//! This module provides the configuration struct controlling a simulation
//! batch: trial count, player strategy, detail recording, seeding, and
//! parallelism.

use serde::{Deserialize, Serialize};

/// Configuration for one simulation batch.
///
/// Defaults match the classic demonstration: 10,000 games, the player always
/// switches, and per-door breakdowns are recorded.
///
/// # Example
/// ```
/// use monty_hall_sim::sim::SimConfig;
///
/// let config = SimConfig::default();
/// assert!(config.switch); // switching is the default strategy
/// assert_eq!(config.trials, 10_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of independent trials to run.
    ///
    /// Must be at least 1; a zero-trial batch has no meaningful
    /// statistics and is rejected by [`SimConfig::validate`].
    pub trials: u64,

    /// Whether the player switches doors after the host's reveal.
    ///
    /// `true` demonstrates the ~2/3 win rate, `false` the ~1/3 baseline.
    pub switch: bool,

    /// Whether to record per-trial picked and winning doors.
    ///
    /// When enabled the report includes the frequency distribution of each
    /// door among initial picks and among winning doors. Costs two extra
    /// tally increments per trial.
    pub verbose: bool,

    /// Random seed for reproducibility.
    ///
    /// If set, the batch replays identically given the same configuration.
    /// If `None`, entropy-based seeding is used.
    pub seed: Option<u64>,

    /// Number of rayon workers for the batch.
    ///
    /// `None` or `Some(1)` runs the strict sequential loop. `Some(0)` uses
    /// all available cores. Each worker gets an independent RNG stream and
    /// partial reports are combined additively, so the aggregate counts are
    /// order-independent.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            switch: true,
            verbose: true,
            seed: None,
            num_threads: None,
        }
    }
}

impl SimConfig {
    /// Create a configuration for the given trial count with defaults
    /// for everything else.
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    /// Create a configuration sized for statistical assertions.
    ///
    /// 100,000 trials is enough to land within ±1.5 percentage points of
    /// the theoretical rates with overwhelming probability.
    pub fn statistical() -> Self {
        Self {
            trials: 100_000,
            ..Default::default()
        }
    }

    /// Builder method: set the trial count.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Builder method: the player keeps the initial pick.
    pub fn with_stay(mut self) -> Self {
        self.switch = false;
        self
    }

    /// Builder method: set the switch strategy explicitly.
    pub fn with_switch(mut self, switch: bool) -> Self {
        self.switch = switch;
        self
    }

    /// Builder method: disable per-door detail recording.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the number of rayon workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
        let config: SimConfig =
            serde_json::from_str(&contents).map_err(|e| format!("invalid config {}: {}", path, e))?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

/// Errors that can occur when validating a simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Trial count is zero; the resulting statistics would be meaningless.
    ZeroTrials,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroTrials => {
                write!(f, "trial count must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Throughput statistics for a completed batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimStats {
    /// Total number of trials completed.
    pub trials: u64,

    /// Wall-clock time spent simulating (in seconds).
    pub elapsed_seconds: f64,

    /// Trials per second.
    pub trials_per_second: f64,
}

impl SimStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update trials per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.trials_per_second = self.trials as f64 / self.elapsed_seconds;
        }
    }
}
