//! Two-against-two games: Best Ball, Scotch and Sixes.

use std::ops::Range;

use log::trace;

use crate::config::{GameConfig, GameMode, MatchMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player, PlayerId};
use crate::round::Round;
use crate::scoring::HOLES;

const LOW_BALL_POINTS: i64 = 2;
const LOW_TOTAL_POINTS: i64 = 3;

/// Sixes segments and the roster positions paired on each.
const SIXES_SEGMENTS: [(Range<usize>, [usize; 2], [usize; 2]); 3] = [
    (0..6, [0, 1], [2, 3]),
    (6..12, [0, 2], [1, 3]),
    (12..18, [0, 3], [1, 2]),
];

fn team_low(round: &Round, ids: &[PlayerId], hole: usize) -> Option<i32> {
    ids.iter().filter_map(|id| round.score(id, hole)).min()
}

fn resolve<'r>(round: &'r Round, ids: &[PlayerId]) -> Vec<&'r Player> {
    ids.iter().filter_map(|id| round.player(id)).collect()
}

/// Settles a signed margin between sides: positive means side A won.
fn settle_margin(
    ledger: &mut Ledger,
    round: &Round,
    a: &[PlayerId],
    b: &[PlayerId],
    margin: i64,
    unit: f64,
    game: &str,
) {
    if margin == 0 {
        return;
    }
    let (winners, losers) = if margin > 0 { (a, b) } else { (b, a) };
    let pot = margin.unsigned_abs() as f64 * unit;
    ledger.pay_split(&resolve(round, losers), &resolve(round, winners), pot, game);
}

/// Low ball per side each hole. Stroke play (default) compares summed low
/// balls over holes both sides posted; match play counts holes won. The
/// losing side pays `betAmount` per stroke or hole of margin.
pub fn best_ball(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::BestBall, round.players());
    let Some(teams) = round.best_ball_teams() else {
        return ledger.finish();
    };
    let mode = config.match_mode(GameMode::BestBall);

    let mut margin: i64 = 0;
    for hole in 0..HOLES {
        let (Some(a), Some(b)) = (
            team_low(round, teams.a(), hole),
            team_low(round, teams.b(), hole),
        ) else {
            continue;
        };
        margin += match mode {
            MatchMode::Stroke => i64::from(b - a),
            MatchMode::Match => i64::from((b - a).signum()),
        };
    }
    settle_margin(
        &mut ledger,
        round,
        teams.a(),
        teams.b(),
        margin,
        config.bet_amount(GameMode::BestBall),
        GameMode::BestBall.as_str(),
    );
    ledger.finish()
}

/// Five points a hole: 2 for low ball, 3 for low team total. A tied category
/// scores for nobody. Only holes where all players on both sides posted count.
pub fn scotch(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Scotch, round.players());
    let Some(teams) = round.scotch_teams() else {
        return ledger.finish();
    };

    let mut margin: i64 = 0;
    for hole in 0..HOLES {
        let (Some(a), Some(b)) = (
            round.hole_scores(teams.a(), hole),
            round.hole_scores(teams.b(), hole),
        ) else {
            trace!("scotch: hole {} incomplete, skipped", hole + 1);
            continue;
        };
        let low_a = a.iter().min().copied().unwrap_or(i32::MAX);
        let low_b = b.iter().min().copied().unwrap_or(i32::MAX);
        margin += LOW_BALL_POINTS * i64::from((low_b - low_a).signum());
        let total_a: i32 = a.iter().sum();
        let total_b: i32 = b.iter().sum();
        margin += LOW_TOTAL_POINTS * i64::from((total_b - total_a).signum());
    }
    settle_margin(
        &mut ledger,
        round,
        teams.a(),
        teams.b(),
        margin,
        config.bet_per_point(),
        GameMode::Scotch.as_str(),
    );
    ledger.finish()
}

/// Four players, three six-hole matches with rotating partners. Each segment
/// is low-ball match play; the losing pair each pay `betPerSegment`, split
/// across the winning pair.
pub fn sixes(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Sixes, round.players());
    let players = round.players();
    if players.len() != 4 {
        return ledger.finish();
    }

    for (holes, a, b) in SIXES_SEGMENTS {
        let a: Vec<PlayerId> = a.iter().map(|&i| players[i].id.clone()).collect();
        let b: Vec<PlayerId> = b.iter().map(|&i| players[i].id.clone()).collect();
        let mut margin: i64 = 0;
        for hole in holes {
            if round.field_scores(hole).is_none() {
                continue;
            }
            if let (Some(low_a), Some(low_b)) =
                (team_low(round, &a, hole), team_low(round, &b, hole))
            {
                margin += i64::from((low_b - low_a).signum());
            }
        }
        // one segment, one stake, whatever the hole margin
        settle_margin(
            &mut ledger,
            round,
            &a,
            &b,
            margin.signum(),
            config.bet_per_segment(),
            GameMode::Sixes.as_str(),
        );
    }
    ledger.finish()
}
