use std::cmp::Ordering;

use log::trace;

use crate::config::{GameConfig, GameMode};
use crate::ledger::{Ledger, Tally};
use crate::model::{GameResult, Player};
use crate::round::Round;

/// Wolf, played off the per-hole wolf declarations.
///
/// A lone wolf plays its score against the best opponent score: a win
/// collects `bet * loneWolfWin` from each opponent, a loss pays
/// `bet * loneWolfLoss` to each. A partnered wolf plays low ball against the
/// other side for a flat `bet` between every winner and loser. Ties push, and
/// a hole is skipped unless every player has posted.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Wolf, round.players());
    if round.players().len() < 2 {
        return ledger.finish();
    }
    let bet = config.bet_amount(GameMode::Wolf);
    let (win_mult, loss_mult) = config.lone_wolf_multipliers();

    let mut tally = Tally::new();
    for (hole, call) in round.annotations().wolf.entries() {
        let Some(wolf) = round.player(&call.wolf_player_id) else {
            continue;
        };
        let Some(scores) = round.field_scores(hole) else {
            trace!("wolf: hole {} incomplete, skipped", hole + 1);
            continue;
        };
        let partner = call
            .partner_id
            .as_deref()
            .and_then(|id| round.player(id))
            .filter(|p| p.id != wolf.id);

        let (side, field): (Vec<(&Player, i32)>, Vec<(&Player, i32)>) =
            scores.into_iter().partition(|(p, _)| {
                p.id == wolf.id || partner.is_some_and(|partner| partner.id == p.id)
            });
        let (Some(side_low), Some(field_low)) = (low(&side), low(&field)) else {
            continue;
        };

        let side: Vec<&Player> = side.iter().map(|(p, _)| *p).collect();
        let field: Vec<&Player> = field.iter().map(|(p, _)| *p).collect();
        let stake = match partner {
            None => match side_low.cmp(&field_low) {
                Ordering::Less => bet * win_mult,
                Ordering::Greater => bet * loss_mult,
                Ordering::Equal => continue,
            },
            Some(_) => bet,
        };
        match side_low.cmp(&field_low) {
            Ordering::Less => {
                for &loser in &field {
                    for &winner in &side {
                        tally.add(loser, winner, stake);
                    }
                }
            }
            Ordering::Greater => {
                for &loser in &side {
                    for &winner in &field {
                        tally.add(loser, winner, stake);
                    }
                }
            }
            Ordering::Equal => {}
        }
    }
    tally.settle(&mut ledger, GameMode::Wolf.as_str());
    ledger.finish()
}

fn low(scores: &[(&Player, i32)]) -> Option<i32> {
    scores.iter().map(|(_, s)| *s).min()
}
