//! Tournament CLI
//!
//! Simulate tournaments and answer bracket arithmetic questions.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pairing_core::{double_bracket, page_playoff, round_robin, single_bracket};
use tournament::{
    Format, MemoryDriver, Pairer, TournamentConfig, TournamentResults, TournamentRunner,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", version, about = "Pair and simulate tournaments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a tournament with Elo decided matches
    Run(RunArgs),
    /// Print how many rounds a format takes
    Rounds {
        #[arg(long, value_enum)]
        format: Format,
        #[arg(long)]
        teams: u32,
    },
    /// Infer the next round from the number of matches created so far
    Guess {
        #[arg(long, value_enum)]
        format: Format,
        #[arg(long)]
        teams: usize,
        #[arg(long)]
        matches: usize,
    },
    /// Print the report of saved results
    Report {
        /// Results JSON written by `run --output`
        file: PathBuf,
    },
}

#[derive(Parser)]
struct RunArgs {
    /// TOML config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<Format>,

    #[arg(long)]
    teams: Option<u32>,

    #[arg(long)]
    rounds: Option<usize>,

    /// Seed for simulated outcomes
    #[arg(long)]
    seed: Option<u64>,

    /// Swiss pairing strategy
    #[arg(long, value_enum)]
    pairer: Option<Pairer>,

    /// Save results as JSON
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print every round as it is played
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print the final report
    #[arg(short, long)]
    quiet: bool,
}

impl RunArgs {
    fn into_config(self) -> anyhow::Result<(TournamentConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => TournamentConfig {
                verbose: true,
                ..Default::default()
            },
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(teams) = self.teams {
            config.teams = teams;
        }
        if self.rounds.is_some() {
            config.rounds = self.rounds;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(pairer) = self.pairer {
            config.options.swiss.pairer = pairer;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.quiet {
            config.verbose = false;
        }
        Ok((config, self.output))
    }
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let (config, output) = args.into_config()?;

    println!("=== {} ({}, {} teams) ===", config.name, config.format, config.teams);
    println!();

    let runner = TournamentRunner::new(config);
    let results = runner
        .run()
        .with_context(|| format!("{} tournament failed", runner.config().format))?;

    println!();
    results.print_report();

    if let Some(path) = output {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn rounds(format: Format, teams: u32) {
    let driver = MemoryDriver::new((1..=teams).collect());
    println!("{format} with {teams} teams:");
    println!("  total rounds:   {}", format.total_rounds(&driver));
    println!("  minimum rounds: {}", format.minimum_rounds(&driver));
}

fn guess(format: Format, teams: usize, matches: usize) -> anyhow::Result<()> {
    let round = match format {
        Format::SingleElimination => single_bracket::guess_round(teams, matches)?,
        Format::DoubleElimination => double_bracket::guess_round(teams, matches)?,
        Format::RoundRobin => round_robin::guess_round(teams, matches)?,
        Format::PagePlayoff => page_playoff::guess_round(matches)?,
        Format::Swiss | Format::Voetlab => {
            bail!("{format} rounds depend on who played, not on the match count")
        }
    };
    println!("next round: {round}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Run(args) => run(args)?,
        Commands::Rounds { format, teams } => rounds(format, teams),
        Commands::Guess {
            format,
            teams,
            matches,
        } => guess(format, teams, matches)?,
        Commands::Report { file } => {
            let results = TournamentResults::load(&file)
                .with_context(|| format!("loading {}", file.display()))?;
            results.print_report();
        }
    }
    Ok(())
}
