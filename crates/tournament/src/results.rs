//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use pairing_core::Score;

use crate::config::TournamentConfig;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access results file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    pub name: String,
    /// Teams in seed order
    pub participants: Vec<u32>,
    pub rounds: Vec<RoundRecord>,
    /// Final standing order with points and ratings
    pub standings: Vec<Standing>,
    pub config: TournamentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub home: u32,
    pub away: Option<u32>,
    pub winner: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub team: u32,
    pub score: Score,
    pub rating: f64,
}

impl TournamentResults {
    pub fn new(participants: Vec<u32>, config: TournamentConfig) -> Self {
        Self {
            name: config.name.clone(),
            participants,
            rounds: Vec::new(),
            standings: Vec::new(),
            config,
        }
    }

    pub fn add_round(&mut self, round: usize, matches: Vec<MatchEntry>) {
        self.rounds.push(RoundRecord { round, matches });
    }

    /// Every match of every round, in play order
    pub fn all_matches(&self) -> impl Iterator<Item = &MatchEntry> + '_ {
        self.rounds.iter().flat_map(|round| round.matches.iter())
    }

    /// Matches lost by `team` (byes never count)
    pub fn losses(&self, team: u32) -> usize {
        self.all_matches()
            .filter(|m| {
                m.away.is_some() && m.winner != team && (m.home == team || m.away == Some(team))
            })
            .count()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Format: {}, {} teams, {} rounds played\n\n",
            self.config.format,
            self.participants.len(),
            self.rounds.len()
        ));

        for record in &self.rounds {
            report.push_str(&format!("Round {}:\n", record.round + 1));
            for m in &record.matches {
                match m.away {
                    Some(away) => report.push_str(&format!(
                        "  #{:<4} vs #{:<4} winner #{}\n",
                        m.home, away, m.winner
                    )),
                    None => report.push_str(&format!("  #{:<4} bye\n", m.home)),
                }
            }
        }

        report.push_str("\nStandings:\n");
        report.push_str(&format!("{:<6} {:<8} {:>8} {:>8}\n", "Pos", "Team", "Points", "Elo"));
        report.push_str(&"-".repeat(34));
        report.push('\n');
        for (position, standing) in self.standings.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} #{:<7} {:>8} {:>8.1}\n",
                position + 1,
                standing.team,
                standing.score,
                standing.rating
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
