use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::GameMode;
use crate::display::{games_table, ledger_table, payout_table, print_error, print_section, print_success};
use crate::engine::settle;
use crate::error::SettleResult;
use crate::model::MultiGameResults;
use crate::round::RoundInput;

#[derive(Parser)]
#[command(name = "golf", version = "1.0.0", about = "Golf side-game settlement: Nassau, Skins, Wolf, Vegas and more.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Settle the games in a round file
    Settle {
        /// Round JSON (players, scores, pars, games, extras)
        file: PathBuf,
        /// Only settle these game modes (e.g., --only skins --only nassau)
        #[arg(long)]
        only: Vec<String>,
        /// Print the results as JSON instead of tables
        #[arg(long)]
        json: bool,
        /// Also write the results as JSON to this file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List every game mode with its default stake
    Games,
}

pub fn run() {
    let cli = Cli::parse();
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    match cli.command {
        Commands::Settle {
            file,
            only,
            json,
            out,
        } => {
            if let Err(e) = cmd_settle(&file, &only, json, out) {
                print_error(&e.to_string());
                process::exit(1);
            }
        }
        Commands::Games => cmd_games(),
    }
}

/// Loads, validates and settles a round file, keeping only the `only` modes
/// when given.
pub fn settle_file(file: &Path, only: &[String]) -> SettleResult<MultiGameResults> {
    let (round, mut games) = RoundInput::load(file)?.into_round()?;
    if !only.is_empty() {
        let wanted = only
            .iter()
            .map(|m| m.parse::<GameMode>())
            .collect::<SettleResult<Vec<_>>>()?;
        games.retain(|g| wanted.contains(&g.mode));
    }
    Ok(settle(&round, &games))
}

fn cmd_settle(
    file: &Path,
    only: &[String],
    json: bool,
    out: Option<PathBuf>,
) -> SettleResult<()> {
    let results = settle_file(file, only)?;

    if let Some(path) = out {
        std::fs::write(&path, serde_json::to_string_pretty(&results)?)?;
        if !json {
            print_success(&format!("Results written to {}", path.display()));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.games.is_empty() {
        println!("  {}", "No games selected.".dimmed());
        return Ok(());
    }
    for game in &results.games {
        println!();
        println!("{}", payout_table(game));
    }
    print_section("Net", &ledger_table(&results));
    Ok(())
}

fn cmd_games() {
    print_section("Games", &games_table());
}
