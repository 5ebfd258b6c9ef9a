//! Dispatcher: runs each selected game against the same round and folds the
//! per-game ledgers into one combined net.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::config::{GameConfig, GameEntry, GameMode};
use crate::games::{
    banker, bingo_bango_bongo, head_to_head, keep_score, nassau, points, side_bets, skins,
    taxman, teams, vegas, wolf,
};
use crate::model::{GameResult, MultiGameResults};
use crate::round::Round;

pub type Calculator = fn(&Round, &GameConfig) -> GameResult;

static CALCULATORS: Lazy<HashMap<GameMode, Calculator>> = Lazy::new(|| {
    let table: [(GameMode, Calculator); 22] = [
        (GameMode::Taxman, taxman::settle),
        (GameMode::Nassau, nassau::settle),
        (GameMode::Skins, skins::settle),
        (GameMode::Wolf, wolf::settle),
        (GameMode::BingoBangoBongo, bingo_bango_bongo::settle),
        (GameMode::Snake, side_bets::snake),
        (GameMode::Vegas, vegas::settle),
        (GameMode::Ctp, side_bets::ctp),
        (GameMode::Trouble, side_bets::trouble),
        (GameMode::Arnies, side_bets::arnies),
        (GameMode::Banker, banker::settle),
        (GameMode::KeepScore, keep_score),
        (GameMode::HeadToHead, head_to_head::settle),
        (GameMode::BestBall, teams::best_ball),
        (GameMode::Stableford, points::stableford),
        (GameMode::Rabbit, side_bets::rabbit),
        (GameMode::Dots, side_bets::dots),
        (GameMode::Sixes, teams::sixes),
        (GameMode::Nines, points::nines),
        (GameMode::Scotch, teams::scotch),
        (GameMode::AcesDeuces, side_bets::aces_deuces),
        (GameMode::Quota, points::quota),
    ];
    table.into_iter().collect()
});

/// Calculator registered for `mode`. The table covers every `GameMode`.
pub fn calculator(mode: GameMode) -> Calculator {
    CALCULATORS[&mode]
}

/// Runs one game in isolation.
pub fn run_game(round: &Round, entry: &GameEntry) -> GameResult {
    let result = calculator(entry.mode)(round, &entry.config);
    debug!(
        "{}: {} payouts, {} players",
        entry.mode,
        result.payouts.len(),
        result.net.len()
    );
    result
}

/// Settles every selected game over one round. Games are independent and are
/// evaluated in parallel; the output keeps the input order.
pub fn settle(round: &Round, games: &[GameEntry]) -> MultiGameResults {
    let results: Vec<GameResult> = games.par_iter().map(|entry| run_game(round, entry)).collect();
    MultiGameResults::combine(round.players(), results)
}
