use std::collections::BTreeMap;
use std::ops::Range;

use itertools::Itertools;
use log::trace;

use crate::config::{GameConfig, GameMode, MatchMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player};
use crate::press::{presses_where, Leg};
use crate::round::Round;
use crate::scoring::{allowances, strokes_received, FULL_ROUND};

/// How a pair is scored: match or stroke, gross or net.
struct Scoring {
    mode: MatchMode,
    allowances: BTreeMap<String, i32>,
}

impl Scoring {
    fn net(&self, round: &Round, player: &Player, hole: usize) -> Option<i32> {
        let gross = round.score(&player.id, hole)?;
        let allowance = self.allowances.get(&player.id).copied().unwrap_or(0);
        Some(gross - strokes_received(allowance, hole))
    }

    /// Signed margin over `holes`, positive when `a` is ahead: holes won
    /// difference in match play, stroke difference in stroke play. Only holes
    /// both players posted count; `None` if there are none.
    fn margin(&self, round: &Round, a: &Player, b: &Player, holes: Range<usize>) -> Option<i32> {
        let pairs: Vec<(i32, i32)> = holes
            .filter_map(|h| Some((self.net(round, a, h)?, self.net(round, b, h)?)))
            .collect();
        if pairs.is_empty() {
            return None;
        }
        Some(match self.mode {
            MatchMode::Match => pairs.iter().map(|(sa, sb)| (sb - sa).signum()).sum(),
            MatchMode::Stroke => pairs.iter().map(|(sa, sb)| sb - sa).sum(),
        })
    }

    fn settle(&self, ledger: &mut Ledger, round: &Round, a: &Player, b: &Player, leg: &Leg) {
        let Some(margin) = self.margin(round, a, b, leg.holes.clone()) else {
            trace!("{}: {} v {} have no common holes", leg.tag, a.name, b.name);
            return;
        };
        let amount = match self.mode {
            MatchMode::Match => leg.stake,
            MatchMode::Stroke => leg.stake * f64::from(margin.abs()),
        };
        if margin > 0 {
            ledger.pay(b, a, amount, &leg.tag);
        } else if margin < 0 {
            ledger.pay(a, b, amount, &leg.tag);
        }
    }
}

/// Every player against every other player over the round. Match play
/// (default) pays `betAmount` to whoever wins more holes; stroke play pays
/// `betAmount` per stroke. With `useHandicaps`, each player gets a stroke on
/// every hole whose difficulty rank is within their allowance over the
/// lowest handicap in the group. Presses tagged for a pair settle separately.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::HeadToHead, round.players());
    let players: Vec<&Player> = round.players().iter().collect();
    if players.len() < 2 {
        return ledger.finish();
    }
    let scoring = Scoring {
        mode: config.match_mode(GameMode::HeadToHead),
        allowances: if config.use_handicaps() {
            allowances(&players)
        } else {
            BTreeMap::new()
        },
    };

    let base = Leg::new(
        FULL_ROUND,
        config.bet_amount(GameMode::HeadToHead),
        GameMode::HeadToHead.as_str(),
    );
    for (a, b) in players.iter().tuple_combinations() {
        scoring.settle(&mut ledger, round, a, b, &base);
        for press in presses_where(round, |g| g.is_match(&a.id, &b.id)) {
            scoring.settle(&mut ledger, round, a, b, &Leg::from(press));
        }
    }
    ledger.finish()
}
