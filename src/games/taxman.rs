use log::trace;

use crate::config::{GameConfig, GameMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player};
use crate::round::Round;
use crate::scoring::{segment_sum, FULL_ROUND};

/// Each player against their own number: under it collects the tax from
/// everyone over theirs. Players without a full 18 sit out.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Taxman, round.players());
    let tax = config.tax_amount();

    let mut winners: Vec<&Player> = Vec::new();
    let mut losers: Vec<&Player> = Vec::new();
    let mut complete = 0;
    for player in round.players() {
        let total = round
            .card(&player.id)
            .and_then(|card| segment_sum(card, FULL_ROUND))
            .filter(|t| *t > 0);
        let Some(total) = total else {
            trace!("taxman: {} has no complete round", player.name);
            continue;
        };
        complete += 1;
        if total < player.tax_man {
            winners.push(player);
        } else if total > player.tax_man {
            losers.push(player);
        }
    }
    if complete < 2 {
        return ledger.finish();
    }

    for loser in &losers {
        for winner in &winners {
            ledger.pay(loser, winner, tax, GameMode::Taxman.as_str());
        }
    }
    ledger.finish()
}
