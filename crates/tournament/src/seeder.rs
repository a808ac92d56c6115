//! Initial ordering strategies applied to a padded slot list

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use pairing_core::{single_bracket, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seeder {
    /// Standard bracket layout (field size must be a power of two)
    Bracket,
    /// Keep the host's seed order
    Identity,
    /// Reproducible shuffle
    Random { seed: u64 },
}

impl Seeder {
    pub fn seed<E: Clone>(&self, slots: Vec<E>) -> Result<Vec<E>> {
        match self {
            Seeder::Bracket => single_bracket::seed(&slots),
            Seeder::Identity => Ok(slots),
            Seeder::Random { seed } => {
                let mut slots = slots;
                slots.shuffle(&mut StdRng::seed_from_u64(*seed));
                Ok(slots)
            }
        }
    }
}

#[cfg(test)]
#[path = "seeder_tests.rs"]
mod seeder_tests;
