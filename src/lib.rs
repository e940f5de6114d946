//! Monty Hall Simulation Library
//!
//! This library simulates the generalized Monty Hall puzzle: N cases, one
//! prize, a host who opens every case but two, and a contestant who either
//! stays with their first pick or switches. Repeated trials show the
//! probability advantage of switching empirically.
//!
//! ## Modules
//!
//! - `trial`: single-trial simulation (draws, host elimination, strategy)
//! - `session`: trial-pair loop, win counters, and rate reporting
//!
//! ## Usage
//!
//! ```bash
//! # Classic 3-door game, 10k quiet trials
//! cargo run --bin monty --release -- --cases 3 --trials 10000 --quiet
//!
//! # Default 26-case game with per-trial narration
//! cargo run --bin monty --release
//! ```

pub mod session;
pub mod trial;
