//! Trial Aggregator and Reporter
//!
//! Runs paired trials (one stay, one switch per iteration), accumulates
//! win counts per strategy, and reports empirical win rates.
//!
//! ## Expected Rates
//! - Staying wins when the first pick was right: 1/N
//! - Switching wins whenever the first pick was wrong: (N-1)/N
//!
//! With the classic 3-case game that is the familiar 1/3 vs 2/3 split.

use anyhow::{ensure, Result};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::trial::{self, Strategy};

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Cases offered per trial.
    pub cases: usize,
    /// Number of trial pairs to run.
    pub trials: usize,
    /// Narrate every trial to stdout.
    pub verbose: bool,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cases: 26,
            trials: 100,
            verbose: true,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cases >= 3,
            "at least 3 cases are required, got {}",
            self.cases
        );
        ensure!(
            self.trials > 0,
            "at least 1 trial is required, got {}",
            self.trials
        );
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionResult {
    pub cases: usize,
    pub trials: usize,
    pub switch_wins: usize,
    pub stay_wins: usize,
}

impl SessionResult {
    /// Switch win rate as a percentage of trials.
    pub fn switch_rate(&self) -> f64 {
        self.switch_wins as f64 / self.trials as f64 * 100.0
    }

    /// Stay win rate as a percentage of trials.
    pub fn stay_rate(&self) -> f64 {
        self.stay_wins as f64 / self.trials as f64 * 100.0
    }

    pub fn print_summary(&self) {
        println!(
            "    Switching won {:5} times out of {} ({}% of the time)",
            self.switch_wins,
            self.trials,
            self.switch_rate()
        );
        println!(
            "Not switching won {:5} times out of {} ({}% of the time)",
            self.stay_wins,
            self.trials,
            self.stay_rate()
        );
    }
}

/// Runs the full session: a stay trial and a switch trial per iteration,
/// drawn independently from a single random source.
pub fn run(config: &SessionConfig) -> Result<SessionResult> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Simulating {} trials...", config.trials);

    let mut stay_wins = 0;
    let mut switch_wins = 0;

    for _ in 0..config.trials {
        let stayed = trial::play(config.cases, Strategy::Stay, &mut rng)?;
        if config.verbose {
            stayed.narrate();
        }
        if stayed.won() {
            stay_wins += 1;
        }

        let switched = trial::play(config.cases, Strategy::Switch, &mut rng)?;
        if config.verbose {
            switched.narrate();
        }
        if switched.won() {
            switch_wins += 1;
        }
    }

    Ok(SessionResult {
        cases: config.cases,
        trials: config.trials,
        switch_wins,
        stay_wins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(cases: usize, trials: usize, seed: u64) -> SessionConfig {
        SessionConfig {
            cases,
            trials,
            verbose: false,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(quiet(2, 100, 0).validate().is_err());
        assert!(quiet(3, 0, 0).validate().is_err());
        assert!(quiet(3, 1, 0).validate().is_ok());
        assert!(run(&quiet(2, 100, 0)).is_err());
        assert!(run(&quiet(3, 0, 0)).is_err());
    }

    #[test]
    fn test_win_counts_stay_within_trials() {
        let result = run(&quiet(26, 250, 11)).unwrap();
        assert_eq!(result.trials, 250);
        assert!(result.switch_wins <= 250);
        assert!(result.stay_wins <= 250);
    }

    #[test]
    fn test_three_case_rates_converge() {
        // 10k trials: switch ~66.7%, stay ~33.3%, tolerance 3 points.
        let result = run(&quiet(3, 10_000, 12)).unwrap();
        assert!((result.switch_rate() - 66.7).abs() < 3.0);
        assert!((result.stay_rate() - 33.3).abs() < 3.0);
    }

    #[test]
    fn test_generalized_rates_converge() {
        // With N cases, staying wins 1/N and switching (N-1)/N.
        let result = run(&quiet(10, 10_000, 13)).unwrap();
        assert!((result.stay_rate() - 10.0).abs() < 3.0);
        assert!((result.switch_rate() - 90.0).abs() < 3.0);
    }

    #[test]
    fn test_same_seed_replays_the_same_session() {
        let a = run(&quiet(26, 500, 14)).unwrap();
        let b = run(&quiet(26, 500, 14)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rates_are_percentages_of_trials() {
        let result = SessionResult {
            cases: 3,
            trials: 200,
            switch_wins: 130,
            stay_wins: 70,
        };
        assert!((result.switch_rate() - 65.0).abs() < 1e-9);
        assert!((result.stay_rate() - 35.0).abs() < 1e-9);
    }
}
