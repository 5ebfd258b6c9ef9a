//! Manually tracked side bets (Closest to Pin, Trouble, Arnies, Dots, Snake)
//! and the hole-by-hole Rabbit and Aces & Deuces.

use log::trace;

use crate::config::{GameConfig, GameMode, TiePolicy};
use crate::games::{others, sole_low};
use crate::ledger::{Ledger, Tally};
use crate::model::{GameResult, Player, PlayerId};
use crate::round::{HoleSheet, Round, SnakeHole};
use crate::scoring::HOLES;

/// Every other player pays `player` the amount.
fn collect<'a>(tally: &mut Tally<'a>, field: &[&'a Player], player: &'a Player, amount: f64) {
    for other in others(field, player) {
        tally.add(other, player, amount);
    }
}

fn finish(mut ledger: Ledger, tally: Tally, mode: GameMode) -> GameResult {
    tally.settle(&mut ledger, mode.as_str());
    ledger.finish()
}

/// Hole winner collects `betAmount` from every other player.
pub fn ctp(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Ctp, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let bet = config.bet_amount(GameMode::Ctp);

    let mut tally = Tally::new();
    if field.len() >= 2 {
        for (_, hole) in round.annotations().ctp.entries() {
            if let Some(winner) = hole.winner_id.as_deref().and_then(|id| round.player(id)) {
                collect(&mut tally, &field, winner, bet);
            }
        }
    }
    finish(ledger, tally, GameMode::Ctp)
}

/// Each trouble a player gets into costs `betAmount` to every other player.
pub fn trouble(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Trouble, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let bet = config.bet_amount(GameMode::Trouble);

    let mut tally = Tally::new();
    if field.len() >= 2 {
        for (_, hole) in round.annotations().trouble.entries() {
            for (id, tags) in &hole.0 {
                let Some(player) = round.player(id) else {
                    continue;
                };
                tally.add_each(player, &others(&field, player), bet * tags.len() as f64);
            }
        }
    }
    finish(ledger, tally, GameMode::Trouble)
}

/// Each qualifying player collects `betAmount` from every other player.
pub fn arnies(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Arnies, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let bet = config.bet_amount(GameMode::Arnies);

    let mut tally = Tally::new();
    if field.len() >= 2 {
        for (_, hole) in round.annotations().arnies.entries() {
            for player in hole.qualified_player_ids.iter().filter_map(|id| round.player(id)) {
                collect(&mut tally, &field, player, bet);
            }
        }
    }
    finish(ledger, tally, GameMode::Arnies)
}

/// Sandies and greenies (and birdies, when `birdieDots` is on) each earn a
/// dot worth `betPerDot` from every other player.
pub fn dots(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Dots, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let bet = config.bet_per_dot();

    let mut dots: Vec<u32> = vec![0; field.len()];
    let mut award = |id: &str| {
        if let Some(i) = field.iter().position(|p| p.id == id) {
            dots[i] += 1;
        }
    };
    for (_, hole) in round.annotations().dots.entries() {
        hole.sandy_player_ids.iter().for_each(|id| award(id.as_str()));
        if let Some(id) = &hole.greenie_id {
            award(id.as_str());
        }
    }
    if config.birdie_dots() {
        for hole in 0..HOLES {
            for p in round.players() {
                if round.score(&p.id, hole).is_some_and(|s| s < round.par(hole)) {
                    award(p.id.as_str());
                }
            }
        }
    }

    let mut tally = Tally::new();
    if field.len() >= 2 {
        for (i, &player) in field.iter().enumerate() {
            collect(&mut tally, &field, player, bet * f64::from(dots[i]));
        }
    }
    finish(ledger, tally, GameMode::Dots)
}

/// The player holding the snake after the last three-putt: the last listed
/// three-putter of the last hole with any.
pub fn snake_holder(sheet: &HoleSheet<SnakeHole>) -> Option<&PlayerId> {
    sheet
        .entries()
        .fold(None, |holder, (_, hole)| hole.three_putter_ids.last().or(holder))
}

/// The final snake holder pays `betAmount` to every other player, times the
/// number of three-putts in the round when `progressive` is on.
pub fn snake(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Snake, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let sheet = &round.annotations().snake;

    let mut tally = Tally::new();
    let holder = snake_holder(sheet).and_then(|id| round.player(id));
    if let (Some(holder), true) = (holder, field.len() >= 2) {
        let mut bet = config.bet_amount(GameMode::Snake);
        if config.progressive() {
            let three_putts: usize = sheet
                .entries()
                .map(|(_, hole)| hole.three_putter_ids.len())
                .sum();
            bet *= three_putts as f64;
        }
        trace!("snake: {} holds the snake", holder.name);
        tally.add_each(holder, &others(&field, holder), bet);
    }
    finish(ledger, tally, GameMode::Snake)
}

/// Rabbit holder after walking every fully-posted hole: a sole low score
/// catches a free rabbit, and a sole low by anyone else sets a held one free.
pub fn rabbit_holder(round: &Round) -> Option<&Player> {
    (0..HOLES)
        .filter_map(|hole| round.field_scores(hole))
        .fold(None::<&Player>, |holder, scores| {
            match (holder, sole_low(&scores)) {
                (None, Some(winner)) => Some(winner),
                (Some(held), Some(winner)) if held.id != winner.id => None,
                (held, _) => held,
            }
        })
}

/// Whoever holds the rabbit at the end collects `betAmount` from every other
/// player.
pub fn rabbit(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::Rabbit, round.players());
    let field: Vec<&Player> = round.players().iter().collect();

    let mut tally = Tally::new();
    if field.len() >= 2 {
        if let Some(holder) = rabbit_holder(round) {
            collect(&mut tally, &field, holder, config.bet_amount(GameMode::Rabbit));
        }
    }
    finish(ledger, tally, GameMode::Rabbit)
}

/// Low score on a hole (the ace) collects `betAmount` from every non-ace;
/// high score (the deuce) pays it to every non-deuce. Tied extremes all take
/// part under `TiePolicy::AllPlay` and void that side under
/// `TiePolicy::Cancel`.
pub fn aces_deuces(round: &Round, config: &GameConfig) -> GameResult {
    let ledger = Ledger::new(GameMode::AcesDeuces, round.players());
    let field: Vec<&Player> = round.players().iter().collect();
    let bet = config.bet_amount(GameMode::AcesDeuces);
    let policy = config.tie_policy();

    let mut tally = Tally::new();
    if field.len() >= 2 {
        for hole in 0..HOLES {
            let Some(scores) = round.field_scores(hole) else {
                continue;
            };
            let (Some(low), Some(high)) = (
                scores.iter().map(|(_, s)| *s).min(),
                scores.iter().map(|(_, s)| *s).max(),
            ) else {
                continue;
            };
            if low == high {
                continue;
            }
            let at = |target: i32| {
                let tied: Vec<&Player> = scores
                    .iter()
                    .filter(|(_, s)| *s == target)
                    .map(|(p, _)| *p)
                    .collect();
                match policy {
                    TiePolicy::Cancel if tied.len() > 1 => Vec::new(),
                    _ => tied,
                }
            };
            let aces = at(low);
            let deuces = at(high);
            for &ace in &aces {
                for &other in field.iter().filter(|p| !aces.iter().any(|a| a.id == p.id)) {
                    tally.add(other, ace, bet);
                }
            }
            for &deuce in &deuces {
                for &other in field.iter().filter(|p| !deuces.iter().any(|d| d.id == p.id)) {
                    tally.add(deuce, other, bet);
                }
            }
        }
    }
    finish(ledger, tally, GameMode::AcesDeuces)
}
