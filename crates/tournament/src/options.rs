//! Per-format generation options.
//!
//! Every struct deserializes with defaults for missing fields, so a config
//! file only needs to name what it changes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use pairing_core::Score;

use crate::seeder::Seeder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationOptions {
    /// Round to generate; inferred from the match count when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<usize>,
    pub seeder: Seeder,
}

impl Default for EliminationOptions {
    fn default() -> Self {
        Self {
            round: None,
            seeder: Seeder::Bracket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundRobinOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<usize>,
    pub seeder: Seeder,
}

impl Default for RoundRobinOptions {
    fn default() -> Self {
        Self {
            round: None,
            seeder: Seeder::Identity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagePlayoffOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<usize>,
    /// Add a third place match to the final round
    pub bronze_match: bool,
}

/// Where a bye should preferably go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ByePlacement {
    #[default]
    None,
    TopHalf,
    BottomHalf,
    LowestScore,
}

/// Swiss pairing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pairer {
    /// Score group slide, falling back to global minimum cost matching
    #[default]
    Dutch,
    /// Dutch with bonus points for the top seeds in the opening rounds
    AcceleratedDutch,
    /// Classic Dutch: merged score groups with a per-group permutation search
    Grouped,
    /// Global minimum cost matching every round
    MinimumCost,
    /// Exhaustive search for the fewest repeats (small fields only)
    MinDuplicates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairOptions {
    /// Score groups smaller than this are merged (grouped pairer)
    pub min_pair_size: usize,
    /// Do not penalise rematches
    pub allow_duplicates: bool,
    pub push_byes_to: ByePlacement,
    /// Number of opening rounds that get accelerated pairings
    pub acceleration_rounds: usize,
    /// Bonus given to the upper half of the seeds while accelerated
    pub acceleration_points: Score,
}

impl Default for PairOptions {
    fn default() -> Self {
        Self {
            min_pair_size: 4,
            allow_duplicates: false,
            push_byes_to: ByePlacement::None,
            acceleration_rounds: 2,
            acceleration_points: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwissOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<usize>,
    pub pairer: Pairer,
    pub pair_options: PairOptions,
}

/// Options for every format, as they appear in a config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub elimination: EliminationOptions,
    pub round_robin: RoundRobinOptions,
    pub page_playoff: PagePlayoffOptions,
    pub swiss: SwissOptions,
}
