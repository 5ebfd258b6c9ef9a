//! Shared scoring primitives: hole ranges, segment sums, money rounding and
//! handicap stroke allocation.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::model::Player;
use crate::round::Scorecard;

pub const HOLES: usize = 18;
pub const FRONT_NINE: Range<usize> = 0..9;
pub const BACK_NINE: Range<usize> = 9..18;
pub const FULL_ROUND: Range<usize> = 0..HOLES;
pub const DEFAULT_PAR: i32 = 4;

/// Hole difficulty ranks, 1 = hardest, 18 = easiest, indexed by hole.
pub const HOLE_HANDICAPS: [u32; HOLES] = [7, 3, 15, 1, 11, 17, 5, 13, 9, 8, 4, 16, 2, 12, 18, 6, 14, 10];

/// Sum of a player's strokes over `holes`. `None` as soon as one hole in the
/// range has no score.
pub fn segment_sum(card: &Scorecard, holes: Range<usize>) -> Option<i32> {
    holes.map(|h| card.get(h).copied()).sum()
}

/// A net ledger with every player at zero.
pub fn zero_ledger(players: &[Player]) -> BTreeMap<String, f64> {
    players.iter().map(|p| (p.name.clone(), 0.0)).collect()
}

/// Two-decimal money rounding, applied once per computed payment.
pub fn round_money(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // normalise -0.0 so serialized ledgers never show "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Strokes a player receives on `hole` given their allowance over the lowest
/// handicap in the group. At most one stroke per hole.
pub fn strokes_received(allowance: i32, hole: usize) -> i32 {
    match HOLE_HANDICAPS.get(hole) {
        Some(&rank) if allowance >= rank as i32 => 1,
        _ => 0,
    }
}

/// Allowance per player id: `handicap - min handicap in group`, using the
/// player's `tax_man` number as the handicap proxy.
pub fn allowances(players: &[&Player]) -> BTreeMap<String, i32> {
    let min = players.iter().map(|p| p.tax_man).min().unwrap_or(0);
    players
        .iter()
        .map(|p| (p.id.clone(), p.tax_man - min))
        .collect()
}
