//! Points games: Stableford, Quota and Nines.

use itertools::Itertools;
use log::trace;

use crate::config::{GameConfig, GameMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player};
use crate::round::Round;
use crate::scoring::{FULL_ROUND, HOLES};

pub const QUOTA_BASE: i32 = 36;
const NINES_POOL: [f64; 3] = [5.0, 3.0, 1.0];

pub fn stableford_points(score: i32, par: i32) -> i32 {
    (2 - (score - par)).max(0)
}

pub fn quota_points(score: i32, par: i32) -> i32 {
    match score - par {
        d if d >= 2 => 0,
        1 => 1,
        0 => 2,
        -1 => 4,
        _ => 8,
    }
}

/// The sole highest metric collects `unit * (leader - other)` from every
/// other player. A shared lead pushes.
fn settle_leader(ledger: &mut Ledger, metrics: &[(&Player, i32)], unit: f64, game: &str) {
    if metrics.len() < 2 {
        return;
    }
    let Some(high) = metrics.iter().map(|(_, m)| *m).max() else {
        return;
    };
    let leaders: Vec<&Player> = metrics
        .iter()
        .filter(|(_, m)| *m == high)
        .map(|(p, _)| *p)
        .collect();
    if leaders.len() != 1 {
        trace!("{}: lead shared at {}, push", game, high);
        return;
    }
    let leader = leaders[0];
    for (player, metric) in metrics.iter().filter(|(p, _)| p.id != leader.id) {
        ledger.pay(player, leader, unit * f64::from(high - metric), game);
    }
}

/// Points off par on every entered hole; players with nothing entered sit out.
pub fn stableford(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Stableford, round.players());
    let metrics: Vec<(&Player, i32)> = round
        .players()
        .iter()
        .filter_map(|p| {
            let card = round.card(&p.id)?;
            let mut entered = card.entries().peekable();
            entered.peek()?;
            let points = entered
                .map(|(hole, &score)| stableford_points(score, round.par(hole)))
                .sum();
            Some((p, points))
        })
        .collect();
    settle_leader(
        &mut ledger,
        &metrics,
        config.bet_amount(GameMode::Stableford),
        GameMode::Stableford.as_str(),
    );
    ledger.finish()
}

/// Quota points against `36 - taxMan`, over a complete 18 only.
pub fn quota(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Quota, round.players());
    let metrics: Vec<(&Player, i32)> = round
        .players()
        .iter()
        .filter_map(|p| {
            let points: Option<i32> = FULL_ROUND
                .map(|hole| round.score(&p.id, hole).map(|s| quota_points(s, round.par(hole))))
                .sum();
            if points.is_none() {
                trace!("quota: {} has no complete round", p.name);
            }
            points.map(|pts| (p, pts - (QUOTA_BASE - p.tax_man)))
        })
        .collect();
    settle_leader(
        &mut ledger,
        &metrics,
        config.bet_per_point(),
        GameMode::Quota.as_str(),
    );
    ledger.finish()
}

/// Splits the 5/3/1 pool among scores, tied ranks sharing their pooled points.
pub fn nines_points(scores: &[i32]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| scores[i]);
    let mut points = vec![0.0; scores.len()];
    let mut rank = 0;
    for (_, group) in &order.iter().chunk_by(|&&i| scores[i]) {
        let group: Vec<usize> = group.copied().collect();
        let pool: f64 = NINES_POOL.iter().skip(rank).take(group.len()).sum();
        for &i in &group {
            points[i] = pool / group.len() as f64;
        }
        rank += group.len();
    }
    points
}

/// Three players, nine points a hole. Every pair settles its point
/// difference at `betPerPoint`.
pub fn nines(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Nines, round.players());
    let players = round.players();
    if players.len() != NINES_POOL.len() {
        return ledger.finish();
    }

    let mut totals = vec![0.0; players.len()];
    for hole in 0..HOLES {
        let Some(scores) = round.field_scores(hole) else {
            continue;
        };
        let scores: Vec<i32> = scores.iter().map(|(_, s)| *s).collect();
        for (total, pts) in totals.iter_mut().zip(nines_points(&scores)) {
            *total += pts;
        }
    }

    let bet = config.bet_per_point();
    for (i, j) in (0..players.len()).tuple_combinations() {
        let diff = totals[i] - totals[j];
        if diff > 0.0 {
            ledger.pay(&players[j], &players[i], diff * bet, GameMode::Nines.as_str());
        } else if diff < 0.0 {
            ledger.pay(&players[i], &players[j], -diff * bet, GameMode::Nines.as_str());
        }
    }
    ledger.finish()
}
