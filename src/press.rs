//! Presses: side bets over a contiguous hole range, staked and settled apart
//! from the game they are layered on.

use std::ops::Range;

use log::trace;

use crate::ledger::Ledger;
use crate::model::Player;
use crate::round::{Press, PressGame, Round};
use crate::scoring::segment_sum;

pub const NASSAU_PRESS_TAG: &str = "nassau-press";
pub const HEAD_TO_HEAD_PRESS_TAG: &str = "headToHead-press";

/// One independently staked stroke segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub holes: Range<usize>,
    pub stake: f64,
    pub tag: String,
}

impl Leg {
    pub fn new(holes: Range<usize>, stake: f64, tag: &str) -> Self {
        Leg {
            holes,
            stake,
            tag: tag.to_string(),
        }
    }
}

/// Nassau presses are tagged `nassau-press`; head-to-head presses carry
/// their pair, as in `headToHead-press:p1:p2`.
impl From<&Press> for Leg {
    fn from(press: &Press) -> Self {
        let tag = match &press.game {
            PressGame::Nassau => NASSAU_PRESS_TAG.to_string(),
            PressGame::HeadToHead { a, b } => format!("{}:{}:{}", HEAD_TO_HEAD_PRESS_TAG, a, b),
        };
        Leg {
            holes: press.holes(),
            stake: press.bet_amount,
            tag,
        }
    }
}

/// Presses layered on games accepted by `filter`, in input order.
pub fn presses_where<'r>(round: &'r Round, filter: impl Fn(&PressGame) -> bool) -> Vec<&'r Press> {
    round.presses().iter().filter(|p| filter(&p.game)).collect()
}

/// Low total over the leg wins; the winner collects the stake from every
/// other participant. Players missing a hole in the leg sit it out, and a tie
/// for low pushes.
pub fn settle_low_total(ledger: &mut Ledger, round: &Round, players: &[&Player], leg: &Leg) {
    let totals: Vec<(&Player, i32)> = players
        .iter()
        .filter_map(|p| {
            let total = round
                .card(&p.id)
                .and_then(|card| segment_sum(card, leg.holes.clone()));
            if total.is_none() {
                trace!("{}: {} has no complete total, excluded", leg.tag, p.name);
            }
            total.map(|t| (*p, t))
        })
        .collect();
    if totals.len() < 2 {
        return;
    }
    let Some(low) = totals.iter().map(|(_, t)| *t).min() else {
        return;
    };
    let leaders: Vec<&Player> = totals
        .iter()
        .filter(|(_, t)| *t == low)
        .map(|(p, _)| *p)
        .collect();
    if leaders.len() != 1 {
        trace!("{}: {} tied at {}, push", leg.tag, leaders.len(), low);
        return;
    }
    let winner = leaders[0];
    for (loser, _) in totals.iter().filter(|(p, _)| p.id != winner.id) {
        ledger.pay(loser, winner, leg.stake, &leg.tag);
    }
}
