//! Aggregate report for a simulation batch.
//!
//! A [`Report`] accumulates win/loss counts and, when detail recording is
//! enabled, per-door tallies of initial picks and winning doors. Partial
//! reports from parallel workers merge additively, so aggregation is
//! order-independent.

use std::fmt;

use crate::game::{Door, TrialOutcome, DOOR_COUNT};
use crate::sim::config::SimStats;

/// Return `count` as a fraction of `total` on a 0..=scale range.
///
/// The default reporting scale is 100.0 (percent).
pub fn percent_of(count: u64, total: u64, scale: f64) -> f64 {
    count as f64 * scale / total as f64
}

/// Per-door occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorTally {
    counts: [u64; DOOR_COUNT],
}

impl DoorTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of the given door.
    pub fn record(&mut self, door: Door) {
        self.counts[door.index()] += 1;
    }

    /// Occurrences of the given door.
    pub fn count(&self, door: Door) -> u64 {
        self.counts[door.index()]
    }

    /// Total occurrences across all doors.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Add another tally's counts into this one.
    pub fn merge(&mut self, other: &DoorTally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}

/// Aggregated results of one simulation batch.
///
/// Built incrementally by [`crate::sim::BatchRunner`] via [`Report::record`],
/// or combined from parallel partials via [`Report::merge`]. The `Display`
/// implementation produces the human-readable console summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Number of trials recorded so far.
    pub trials: u64,

    /// Number of trials the player won.
    pub wins: u64,

    /// Whether the player followed the switch strategy.
    pub switch: bool,

    /// Distribution of initial picks, when detail recording is on.
    pub picked: Option<DoorTally>,

    /// Distribution of winning doors, when detail recording is on.
    pub winning: Option<DoorTally>,

    /// Throughput statistics, filled in by the runner after the batch.
    pub stats: SimStats,
}

impl Report {
    /// Create an empty report.
    ///
    /// # Arguments
    /// * `switch` - The strategy this batch simulates
    /// * `verbose` - Whether to allocate per-door tallies
    pub fn new(switch: bool, verbose: bool) -> Self {
        let tally = if verbose { Some(DoorTally::new()) } else { None };
        Self {
            trials: 0,
            wins: 0,
            switch,
            picked: tally,
            winning: tally,
            stats: SimStats::new(),
        }
    }

    /// Record one trial outcome.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        if outcome.won {
            self.wins += 1;
        }
        if let Some(picked) = self.picked.as_mut() {
            picked.record(outcome.picked);
        }
        if let Some(winning) = self.winning.as_mut() {
            winning.record(outcome.winning);
        }
    }

    /// Number of trials the player lost.
    pub fn losses(&self) -> u64 {
        self.trials - self.wins
    }

    /// Win percentage over the recorded trials.
    pub fn win_rate(&self) -> f64 {
        percent_of(self.wins, self.trials, 100.0)
    }

    /// Loss percentage over the recorded trials.
    pub fn loss_rate(&self) -> f64 {
        percent_of(self.losses(), self.trials, 100.0)
    }

    /// Fold another report's counts into this one.
    ///
    /// Used to combine partial reports from parallel workers. Addition is
    /// commutative, so worker completion order does not matter.
    pub fn merge(&mut self, other: &Report) {
        self.trials += other.trials;
        self.wins += other.wins;
        match (self.picked.as_mut(), other.picked.as_ref()) {
            (Some(mine), Some(theirs)) => mine.merge(theirs),
            _ => self.picked = None,
        }
        match (self.winning.as_mut(), other.winning.as_ref()) {
            (Some(mine), Some(theirs)) => mine.merge(theirs),
            _ => self.winning = None,
        }
    }

    fn fmt_tally(f: &mut fmt::Formatter<'_>, name: &str, tally: &DoorTally, trials: u64) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}:", name)?;
        for door in Door::ALL {
            let count = tally.count(door);
            writeln!(
                f,
                " {} = {} ({:.2}%)",
                door,
                count,
                percent_of(count, trials, 100.0)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = if self.switch { "switch" } else { "stay" };
        writeln!(f, "Games ({}):", strategy)?;
        writeln!(f, " count = {}", self.trials)?;
        writeln!(f, " won = {} ({:.2}%)", self.wins, self.win_rate())?;
        writeln!(f, " lost = {} ({:.2}%)", self.losses(), self.loss_rate())?;
        if let Some(picked) = self.picked.as_ref() {
            Self::fmt_tally(f, "Picked", picked, self.trials)?;
        }
        if let Some(winning) = self.winning.as_ref() {
            Self::fmt_tally(f, "Winning", winning, self.trials)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(won: bool, picked: u8, winning: u8) -> TrialOutcome {
        let final_door = if won { Door::new(winning) } else { Door::new(picked) };
        TrialOutcome {
            won,
            picked: Door::new(picked),
            final_door,
            winning: Door::new(winning),
        }
    }

    #[test]
    fn test_percent_of() {
        assert!((percent_of(1, 3, 100.0) - 33.333333333333336).abs() < 1e-12);
        assert!((percent_of(2, 4, 100.0) - 50.0).abs() < f64::EPSILON);
        assert!((percent_of(1, 2, 1.0) - 0.5).abs() < f64::EPSILON);
        assert!((percent_of(0, 10, 100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_accumulates_counts() {
        let mut report = Report::new(true, true);
        report.record(&outcome(true, 2, 1));
        report.record(&outcome(false, 2, 3));
        report.record(&outcome(true, 1, 3));

        assert_eq!(report.trials, 3);
        assert_eq!(report.wins, 2);
        assert_eq!(report.losses(), 1);

        let picked = report.picked.unwrap();
        assert_eq!(picked.count(Door::new(1)), 1);
        assert_eq!(picked.count(Door::new(2)), 2);
        assert_eq!(picked.count(Door::new(3)), 0);
        assert_eq!(picked.total(), 3);

        let winning = report.winning.unwrap();
        assert_eq!(winning.count(Door::new(1)), 1);
        assert_eq!(winning.count(Door::new(3)), 2);
    }

    #[test]
    fn test_quiet_report_skips_tallies() {
        let mut report = Report::new(false, false);
        report.record(&outcome(true, 1, 1));
        assert!(report.picked.is_none());
        assert!(report.winning.is_none());
    }

    #[test]
    fn test_merge_is_additive() {
        let mut a = Report::new(true, true);
        a.record(&outcome(true, 1, 2));
        a.record(&outcome(false, 3, 2));

        let mut b = Report::new(true, true);
        b.record(&outcome(true, 2, 3));

        let mut merged_ab = a.clone();
        merged_ab.merge(&b);
        let mut merged_ba = b.clone();
        merged_ba.merge(&a);

        assert_eq!(merged_ab.trials, 3);
        assert_eq!(merged_ab.wins, 2);
        assert_eq!(merged_ab.trials, merged_ba.trials);
        assert_eq!(merged_ab.wins, merged_ba.wins);
        assert_eq!(merged_ab.picked, merged_ba.picked);
        assert_eq!(merged_ab.winning, merged_ba.winning);
    }

    #[test]
    fn test_display_contains_summary_lines() {
        let mut report = Report::new(true, true);
        report.record(&outcome(true, 2, 1));
        report.record(&outcome(false, 1, 3));
        let text = report.to_string();
        assert!(text.contains("Games (switch):"));
        assert!(text.contains(" count = 2"));
        assert!(text.contains(" won = 1 (50.00%)"));
        assert!(text.contains(" lost = 1 (50.00%)"));
        assert!(text.contains("Picked:"));
        assert!(text.contains("Winning:"));
        assert!(text.contains(" door1 = "));
    }

    #[test]
    fn test_display_quiet_omits_breakdowns() {
        let mut report = Report::new(false, false);
        report.record(&outcome(false, 2, 1));
        let text = report.to_string();
        assert!(text.contains("Games (stay):"));
        assert!(!text.contains("Picked:"));
        assert!(!text.contains("Winning:"));
    }
}
