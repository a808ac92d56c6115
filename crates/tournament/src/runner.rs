//! Simulated tournaments: generate a round, decide it, repeat

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use pairing_core::{Result, Score};

use crate::config::TournamentConfig;
use crate::driver::Driver;
use crate::elo::EloTracker;
use crate::memory::{MemoryDriver, MemoryMatch};
use crate::options::FormatOptions;
use crate::results::{MatchEntry, Standing, TournamentResults};

/// Points for a win or a bye
pub const WIN_POINTS: Score = 2;

/// Plays a whole tournament in memory. Match outcomes are drawn from Elo
/// ratings that start out ordered by seed.
pub struct TournamentRunner {
    config: TournamentConfig,
}

impl TournamentRunner {
    pub fn new(config: TournamentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Teams are numbered `1..=teams` in seed order
    pub fn participants(&self) -> Vec<u32> {
        (1..=self.config.teams).collect()
    }

    /// Rounds that `run` plays
    pub fn planned_rounds(&self) -> usize {
        let driver = MemoryDriver::new(self.participants());
        self.config
            .rounds
            .unwrap_or_else(|| self.config.format.total_rounds(&driver))
    }

    pub fn run(&self) -> Result<TournamentResults> {
        let participants = self.participants();
        let mut driver = MemoryDriver::new(participants.clone());
        let mut elo = EloTracker::seeded(&participants, self.config.rating_spread);
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut results = TournamentResults::new(participants, self.config.clone());

        let format = self.config.format;
        let rounds = self.planned_rounds();
        info!(%format, teams = self.config.teams, rounds, "starting tournament");

        for round in 0..rounds {
            let options = self.options_for_round(round);
            let created = format.generate(&mut driver, &options)?;
            debug!(round, matches = created.len(), "round generated");

            let entries: Vec<MatchEntry> = created
                .iter()
                .map(|m| Self::decide(&mut driver, &mut elo, &mut rng, m))
                .collect();

            if self.config.verbose {
                Self::print_round(round, &entries);
            }
            results.add_round(round, entries);
        }

        results.standings = driver
            .ranked_teams()
            .into_iter()
            .map(|team| Standing {
                team,
                score: driver.team_score(&team),
                rating: elo.get_rating(team),
            })
            .collect();
        info!(rounds = results.rounds.len(), "tournament finished");
        Ok(results)
    }

    /// The configured options with every format pinned to `round`
    fn options_for_round(&self, round: usize) -> FormatOptions {
        let mut options = self.config.options.clone();
        options.elimination.round = Some(round);
        options.round_robin.round = Some(round);
        options.page_playoff.round = Some(round);
        options.swiss.round = Some(round);
        options
    }

    /// Byes go to the home team; real matches are drawn from the ratings.
    fn decide(
        driver: &mut MemoryDriver<u32>,
        elo: &mut EloTracker,
        rng: &mut StdRng,
        m: &MemoryMatch<u32>,
    ) -> MatchEntry {
        let winner = match m.away {
            None => m.home,
            Some(away) => {
                let winner = elo.play(m.home, away, rng);
                let loser = if winner == m.home { away } else { m.home };
                elo.update_ratings(winner, loser);
                winner
            }
        };
        driver.set_winner(m.id, winner);
        driver.add_score(&winner, WIN_POINTS);
        MatchEntry {
            home: m.home,
            away: m.away,
            winner,
        }
    }

    fn print_round(round: usize, entries: &[MatchEntry]) {
        println!("Round {}:", round + 1);
        for entry in entries {
            match entry.away {
                Some(away) => println!("  #{} vs #{}: #{} wins", entry.home, away, entry.winner),
                None => println!("  #{}: bye", entry.home),
            }
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
