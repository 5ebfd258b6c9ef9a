use crate::config::{GameConfig, GameMode};
use crate::ledger::Ledger;
use crate::model::{GameResult, Player};
use crate::press::{presses_where, settle_low_total, Leg};
use crate::round::{PressGame, Round};
use crate::scoring::{BACK_NINE, FRONT_NINE, FULL_ROUND};

pub const FRONT_TAG: &str = "nassau-front";
pub const BACK_TAG: &str = "nassau-back";
pub const TOTAL_TAG: &str = "nassau-total";

/// Front nine, back nine and full eighteen, each a separate low-total bet,
/// followed by any Nassau presses as their own payout lines.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::Nassau, round.players());
    let players: Vec<&Player> = round.players().iter().collect();
    let (front, back, total) = config.nassau_legs();

    let legs = [
        Leg::new(FRONT_NINE, front, FRONT_TAG),
        Leg::new(BACK_NINE, back, BACK_TAG),
        Leg::new(FULL_ROUND, total, TOTAL_TAG),
    ];
    for leg in &legs {
        settle_low_total(&mut ledger, round, &players, leg);
    }

    for press in presses_where(round, |g| *g == PressGame::Nassau) {
        settle_low_total(&mut ledger, round, &players, &Leg::from(press));
    }
    ledger.finish()
}
