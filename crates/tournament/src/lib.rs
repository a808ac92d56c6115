//! Tournament systems over a host-owned match store
//!
//! This crate provides:
//! - Single and double elimination brackets
//! - Round robin and page playoff schedules
//! - Swiss pairing (Dutch, accelerated, grouped, minimum cost) and Voetlab
//! - An in-memory host plus an Elo driven simulator for trying formats out
//!
//! A host implements [`Driver`] (read access) and [`MatchBuilder`] (match
//! creation). Each format exposes `total_rounds`, `guess_round`, `pairs` and
//! `generate` over those traits.
//!
//! # Usage
//!
//! ```bash
//! # Simulate a 12 team Swiss event
//! cargo run -p tournament -- run --format swiss --teams 12
//!
//! # How many rounds does a double elimination of 9 take?
//! cargo run -p tournament -- rounds --format double-elimination --teams 9
//! ```

mod config;
mod driver;
mod elo;
mod format;
mod memory;
mod options;
mod proxy;
mod results;
mod runner;
mod seeder;

pub mod double_elimination;
pub mod page_playoff;
pub mod round_robin;
pub mod single_elimination;
pub mod swiss;
pub mod voetlab;

pub use config::*;
pub use driver::*;
pub use elo::*;
pub use format::*;
pub use memory::*;
pub use options::*;
pub use proxy::*;
pub use results::*;
pub use runner::*;
pub use seeder::*;

pub use pairing_core::{Pair, PairingError, Result, Score, Slot, TeamId};
