//! Result model: players, payouts and the per-game / combined ledgers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GameMode;
use crate::scoring::{round_money, zero_ledger};

pub type PlayerId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Personal target score for Tax Man, also used as the handicap proxy.
    pub tax_man: i32,
}

impl Player {
    pub fn new(id: &str, name: &str, tax_man: i32) -> Self {
        Player {
            id: id.to_string(),
            name: name.to_string(),
            tax_man,
        }
    }
}

/// A directed settlement instruction. `amount` is always positive and
/// `from != to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub game: String,
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ${:.2} ({})", self.from, self.to, self.amount, self.game)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub mode: GameMode,
    pub label: String,
    pub payouts: Vec<Payout>,
    /// Keyed by player name. Sums to zero.
    pub net: BTreeMap<String, f64>,
}

impl GameResult {
    /// No payouts and a zero ledger for every player.
    pub fn empty(mode: GameMode, players: &[Player]) -> Self {
        GameResult {
            mode,
            label: mode.label().to_string(),
            payouts: Vec::new(),
            net: zero_ledger(players),
        }
    }

    pub fn net_of(&self, name: &str) -> f64 {
        self.net.get(name).copied().unwrap_or(0.0)
    }

    pub fn is_push(&self) -> bool {
        self.payouts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiGameResults {
    pub player_names: Vec<String>,
    pub games: Vec<GameResult>,
    pub combined_net: BTreeMap<String, f64>,
}

impl MultiGameResults {
    pub fn combine(players: &[Player], games: Vec<GameResult>) -> Self {
        let mut combined_net = zero_ledger(players);
        for game in &games {
            for (name, amount) in &game.net {
                if let Some(total) = combined_net.get_mut(name) {
                    *total += amount;
                }
            }
        }
        for total in combined_net.values_mut() {
            *total = round_money(*total);
        }
        MultiGameResults {
            player_names: players.iter().map(|p| p.name.clone()).collect(),
            games,
            combined_net,
        }
    }

    pub fn net_of(&self, name: &str) -> f64 {
        self.combined_net.get(name).copied().unwrap_or(0.0)
    }

    pub fn all_payouts(&self) -> impl Iterator<Item = &Payout> {
        self.games.iter().flat_map(|g| g.payouts.iter())
    }
}
