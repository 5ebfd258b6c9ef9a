use log::{debug, trace};

use crate::config::{GameConfig, GameMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player, PlayerId};
use crate::round::Round;
use crate::scoring::HOLES;

const TEAM_SIZE: usize = 2;

/// Two-player teams whose scores are read as one number per hole, low digit
/// first. The per-hole difference accrues to a running total; the losing side
/// pays `|total| * betPerPoint` each, split across the winners. Anything but
/// two against two pushes.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Vegas, round.players());
    let Some(teams) = round.vegas_teams() else {
        return ledger.finish();
    };
    if teams.a().len() != TEAM_SIZE || teams.b().len() != TEAM_SIZE {
        debug!(
            "vegas: teams of {} and {}, push",
            teams.a().len(),
            teams.b().len()
        );
        return ledger.finish();
    }
    let flip_bird = config.flip_bird();

    let mut total: i64 = 0;
    for hole in 0..HOLES {
        let (Some(a), Some(b)) = (
            round.hole_scores(teams.a(), hole),
            round.hole_scores(teams.b(), hole),
        ) else {
            trace!("vegas: hole {} incomplete, skipped", hole + 1);
            continue;
        };
        let par = round.par(hole);
        let a_birdie = a.iter().any(|s| *s < par);
        let b_birdie = b.iter().any(|s| *s < par);
        let flip_a = flip_bird && b_birdie && !a_birdie;
        let flip_b = flip_bird && a_birdie && !b_birdie;

        let next = team_number(&a, flip_a).zip(team_number(&b, flip_b)).and_then(
            |(a_number, b_number)| {
                trace!("vegas: hole {} {} v {}", hole + 1, a_number, b_number);
                b_number
                    .checked_sub(a_number)
                    .and_then(|diff| total.checked_add(diff))
            },
        );
        match next {
            Some(next) => total = next,
            None => trace!("vegas: hole {} out of range, skipped", hole + 1),
        }
    }
    if total == 0 {
        return ledger.finish();
    }

    let pot = total.unsigned_abs() as f64 * config.bet_per_point();
    let (winners, losers) = if total > 0 {
        (teams.a(), teams.b())
    } else {
        (teams.b(), teams.a())
    };
    let winners = resolve(round, winners);
    let losers = resolve(round, losers);
    ledger.pay_split(&losers, &winners, pot, GameMode::Vegas.as_str());
    ledger.finish()
}

/// Reads a team's scores as one number: low score first (high first when
/// flipped), with any double-digit score always in the last position.
/// `None` when the number does not fit in an `i64`.
pub fn team_number(scores: &[i32], flipped: bool) -> Option<i64> {
    let mut ordered = scores.to_vec();
    ordered.sort_unstable();
    if flipped {
        ordered.reverse();
    }
    let (singles, doubles): (Vec<i32>, Vec<i32>) = ordered.into_iter().partition(|s| *s < 10);
    singles
        .into_iter()
        .chain(doubles)
        .try_fold(0i64, |acc, s| {
            let s = i64::from(s.max(0));
            let width = 10i64.checked_pow(s.to_string().len() as u32)?;
            acc.checked_mul(width)?.checked_add(s)
        })
}

fn resolve<'r>(round: &'r Round, ids: &[PlayerId]) -> Vec<&'r Player> {
    ids.iter().filter_map(|id| round.player(id)).collect()
}
