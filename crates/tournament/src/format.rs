//! Dispatch over all tournament systems

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use pairing_core::Result;

use crate::driver::{Driver, MatchBuilder};
use crate::options::FormatOptions;
use crate::{double_elimination, page_playoff, round_robin, single_elimination, swiss, voetlab};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    PagePlayoff,
    #[default]
    Swiss,
    Voetlab,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::SingleElimination => "single elimination",
            Format::DoubleElimination => "double elimination",
            Format::RoundRobin => "round robin",
            Format::PagePlayoff => "page playoff",
            Format::Swiss => "swiss",
            Format::Voetlab => "voetlab",
        }
    }

    /// Create the matches of the next round (or the round named in `options`)
    pub fn generate<D: MatchBuilder + ?Sized>(
        self,
        driver: &mut D,
        options: &FormatOptions,
    ) -> Result<Vec<D::Match>> {
        match self {
            Format::SingleElimination => single_elimination::generate(driver, &options.elimination),
            Format::DoubleElimination => double_elimination::generate(driver, &options.elimination),
            Format::RoundRobin => round_robin::generate(driver, &options.round_robin),
            Format::PagePlayoff => page_playoff::generate(driver, &options.page_playoff),
            Format::Swiss => swiss::generate(driver, &options.swiss),
            Format::Voetlab => voetlab::generate(driver, &options.swiss),
        }
    }

    /// Rounds in a complete tournament. For Swiss this is the minimum
    /// number of rounds; hosts may play more.
    pub fn total_rounds<D: Driver + ?Sized>(self, driver: &D) -> usize {
        match self {
            Format::SingleElimination => single_elimination::total_rounds(driver),
            Format::DoubleElimination => double_elimination::total_rounds(driver),
            Format::RoundRobin => round_robin::total_rounds(driver),
            Format::PagePlayoff => page_playoff::total_rounds(driver),
            Format::Swiss => swiss::total_rounds(driver),
            Format::Voetlab => voetlab::total_rounds(driver),
        }
    }

    pub fn minimum_rounds<D: Driver + ?Sized>(self, driver: &D) -> usize {
        match self {
            Format::Swiss => swiss::minimum_rounds(driver),
            Format::Voetlab => voetlab::minimum_rounds(driver),
            _ => self.total_rounds(driver),
        }
    }

    pub fn guess_round<D: Driver + ?Sized>(self, driver: &D) -> Result<usize> {
        match self {
            Format::SingleElimination => single_elimination::guess_round(driver),
            Format::DoubleElimination => double_elimination::guess_round(driver),
            Format::RoundRobin => round_robin::guess_round(driver),
            Format::PagePlayoff => page_playoff::guess_round(driver),
            Format::Swiss => Ok(swiss::guess_round(driver)),
            Format::Voetlab => Ok(voetlab::guess_round(driver)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
