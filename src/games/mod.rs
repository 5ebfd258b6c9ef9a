//! One calculator per game mode. Each is a pure function of the round and the
//! game's option bag, returning that game's payouts and net ledger.

pub mod banker;
pub mod bingo_bango_bongo;
pub mod head_to_head;
pub mod nassau;
pub mod points;
pub mod side_bets;
pub mod skins;
pub mod taxman;
pub mod teams;
pub mod vegas;
pub mod wolf;

use crate::config::{GameConfig, GameMode};
use crate::model::{GameResult, Player};
use crate::round::Round;

/// Sole lowest entry, or `None` when the low is shared or `entries` is empty.
pub(crate) fn sole_low<'a>(entries: &[(&'a Player, i32)]) -> Option<&'a Player> {
    let low = entries.iter().map(|(_, s)| *s).min()?;
    let mut at_low = entries.iter().filter(|(_, s)| *s == low);
    let first = at_low.next()?;
    match at_low.next() {
        Some(_) => None,
        None => Some(first.0),
    }
}

/// Everyone in `players` except `player`.
pub(crate) fn others<'a>(players: &[&'a Player], player: &Player) -> Vec<&'a Player> {
    players
        .iter()
        .copied()
        .filter(|p| p.id != player.id)
        .collect()
}

/// Round tracked without any betting: zero payouts, zero ledger.
pub fn keep_score(round: &Round, _config: &GameConfig) -> GameResult {
    GameResult::empty(GameMode::KeepScore, round.players())
}
