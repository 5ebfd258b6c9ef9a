use log::trace;

use crate::config::{GameConfig, GameMode};
use crate::games::{others, sole_low};
use crate::ledger::{Ledger, Tally};
use crate::model::{GameResult, Player};
use crate::round::Round;
use crate::scoring::HOLES;

/// Sole low score on a hole wins a skin plus any carried skins; a tie carries
/// the skin forward. Holes the whole field has not posted are skipped.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Skins, round.players());
    let players: Vec<&Player> = round.players().iter().collect();
    if players.len() < 2 {
        return ledger.finish();
    }
    let bet = config.bet_per_skin();

    let mut tally = Tally::new();
    let mut carryover = 0u32;
    for hole in 0..HOLES {
        let Some(scores) = round.field_scores(hole) else {
            trace!("skins: hole {} incomplete, skipped", hole + 1);
            continue;
        };
        match sole_low(&scores) {
            Some(winner) => {
                let skins = 1 + carryover;
                carryover = 0;
                trace!("skins: {} wins {} on hole {}", winner.name, skins, hole + 1);
                for loser in others(&players, winner) {
                    tally.add(loser, winner, bet * skins as f64);
                }
            }
            None if config.carryover() => carryover += 1,
            None => {}
        }
    }
    tally.settle(&mut ledger, GameMode::Skins.as_str());
    ledger.finish()
}
