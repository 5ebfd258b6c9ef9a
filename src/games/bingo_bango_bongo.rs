use crate::config::{GameConfig, GameMode};
use crate::games::others;
use crate::ledger::{Ledger, Tally};
use crate::model::{GameResult, Player};
use crate::round::Round;

/// One point each for first on the green, closest once all are on, and first
/// in the hole. Every point collects `betAmount` from each other player.
pub fn settle(round: &Round, config: &GameConfig) -> GameResult {
    let mut ledger = Ledger::new(GameMode::BingoBangoBongo, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    if field.len() < 2 {
        return ledger.finish();
    }
    let bet = config.bet_amount(GameMode::BingoBangoBongo);

    let mut tally = Tally::new();
    for (_, hole) in round.annotations().bingo_bango_bongo.entries() {
        for winner in hole.awards().filter_map(|id| round.player(id)) {
            for loser in others(&field, winner) {
                tally.add(loser, winner, bet);
            }
        }
    }
    tally.settle(&mut ledger, GameMode::BingoBangoBongo.as_str());
    ledger.finish()
}
