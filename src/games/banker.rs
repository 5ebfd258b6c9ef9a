use std::cmp::Ordering;

use log::trace;

use crate::config::{GameConfig, GameMode};
use crate::ledger::{Ledger, Tally};
use crate::model::GameResult;
use crate::round::Round;

/// The hole's banker plays every other player individually: lower score
/// takes the stake, ties push. A hole's override beats the default stake.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Banker, round.players());
    if round.players().len() < 2 {
        return ledger.finish();
    }
    let default_bet = config.bet_amount(GameMode::Banker);

    let mut tally = Tally::new();
    for (hole, call) in round.annotations().banker.entries() {
        let Some(banker) = call.banker_id.as_deref().and_then(|id| round.player(id)) else {
            continue;
        };
        let Some(banker_score) = round.score(&banker.id, hole) else {
            trace!("banker: {} has no score on hole {}", banker.name, hole + 1);
            continue;
        };
        let stake = call.bet_override.unwrap_or(default_bet);
        for player in round.players().iter().filter(|p| p.id != banker.id) {
            let Some(score) = round.score(&player.id, hole) else {
                continue;
            };
            match banker_score.cmp(&score) {
                Ordering::Less => tally.add(player, banker, stake),
                Ordering::Greater => tally.add(banker, player, stake),
                Ordering::Equal => {}
            }
        }
    }
    tally.settle(&mut ledger, GameMode::Banker.as_str());
    ledger.finish()
}
