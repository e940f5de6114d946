//! Trial Simulator
//!
//! Plays one round of the generalized Monty Hall game: a prize hides behind
//! one of `num_cases` cases, the contestant picks one, the host opens every
//! other case except one, and the contestant either stays or switches.
//!
//! ## Game Protocol
//! 1. Prize case drawn uniformly
//! 2. Contestant's pick drawn uniformly and independently
//! 3. Host opens cases one at a time, never the prize or the pick,
//!    until exactly two stay closed
//! 4. Switching strategy swaps onto the other closed case
//!
//! ## What We Record
//! Every trial keeps the prize position, both choices, and the host's
//! opening order, so outcomes can be checked and narrated after the fact.

use anyhow::{bail, Result};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    Stay,   // Keep the original pick
    Switch, // Take the other closed case
}

impl Strategy {
    pub fn all() -> Vec<Self> {
        vec![Self::Stay, Self::Switch]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stay => "never switch",
            Self::Switch => "always switch",
        }
    }
}

/// Complete record of a single played trial. Cases are numbered
/// `0..num_cases`; narration shows them 1-indexed.
#[derive(Clone, Debug)]
pub struct Trial {
    pub num_cases: usize,
    pub strategy: Strategy,
    pub winning_case: usize,
    pub initial_choice: usize,
    pub final_choice: usize,
    /// Cases the host opened, in opening order. Always `num_cases - 2` long.
    pub opened: Vec<usize>,
}

impl Trial {
    pub fn won(&self) -> bool {
        self.final_choice == self.winning_case
    }

    /// The two cases still closed once the host is done.
    pub fn survivors(&self) -> Vec<usize> {
        (0..self.num_cases)
            .filter(|case| !self.opened.contains(case))
            .collect()
    }

    /// Prints the trial the way the host would call it, one line per event.
    pub fn narrate(&self) {
        println!("Prize is behind case {}", self.winning_case + 1);
        println!("Contestant chooses case {}", self.initial_choice + 1);
        for case in &self.opened {
            println!("Host opens case {}", case + 1);
        }
        if self.strategy == Strategy::Switch {
            println!(
                "Contestant switches from case {} to {}",
                self.initial_choice + 1,
                self.final_choice + 1
            );
        }
        if self.won() {
            println!("Contestant WON");
        } else {
            println!("Contestant LOST");
        }
        println!();
    }
}

/// Runs host elimination and the strategy step for already-drawn positions.
///
/// The host repeatedly draws a uniformly random closed case and opens it,
/// redrawing whenever the draw lands on the prize or the contestant's pick.
/// The closed set strictly shrinks and always holds a removable case while
/// more than two cases remain, so the loop terminates.
pub fn resolve(
    num_cases: usize,
    winning_case: usize,
    initial_choice: usize,
    strategy: Strategy,
    rng: &mut impl Rng,
) -> Trial {
    let mut closed: Vec<usize> = (0..num_cases).collect();
    let mut opened = Vec::with_capacity(num_cases.saturating_sub(2));

    while closed.len() > 2 {
        let slot = rng.gen_range(0..closed.len());
        let case = closed[slot];
        if case == winning_case || case == initial_choice {
            continue;
        }
        closed.remove(slot);
        opened.push(case);
    }

    assert_eq!(closed.len(), 2, "host must leave exactly two cases closed");

    let final_choice = match strategy {
        Strategy::Stay => initial_choice,
        // The pick is never opened, so it is one of the two survivors;
        // switching takes the other one.
        Strategy::Switch => {
            if closed[0] == initial_choice {
                closed[1]
            } else {
                closed[0]
            }
        }
    };

    Trial {
        num_cases,
        strategy,
        winning_case,
        initial_choice,
        final_choice,
        opened,
    }
}

/// Plays one full trial: draws the prize case, then the contestant's pick,
/// then resolves. Draw order is fixed so seeded runs replay identically.
pub fn play(num_cases: usize, strategy: Strategy, rng: &mut impl Rng) -> Result<Trial> {
    if num_cases < 3 {
        bail!(
            "the host needs a case to open: at least 3 cases required, got {}",
            num_cases
        );
    }

    let winning_case = rng.gen_range(0..num_cases);
    let initial_choice = rng.gen_range(0..num_cases);

    Ok(resolve(num_cases, winning_case, initial_choice, strategy, rng))
}

/// Boolean contract: did the contestant win under this strategy?
pub fn simulate(num_cases: usize, switch: bool, rng: &mut impl Rng) -> Result<bool> {
    let strategy = if switch { Strategy::Switch } else { Strategy::Stay };
    Ok(play(num_cases, strategy, rng)?.won())
}
