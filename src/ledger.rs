//! Payout bookkeeping shared by every calculator.
//!
//! `Ledger` turns settlement instructions into a `GameResult`, folding each
//! rounded payout into the net so the ledger is zero-sum by construction.
//! `Tally` accrues raw per-hole amounts between pairs of players and nets
//! them into one rounded payout per pair at the end of the round.

use std::collections::BTreeMap;

use log::trace;

use crate::config::GameMode;
use crate::model::{GameResult, Payout, Player};
use crate::scoring::{round_money, zero_ledger};

pub struct Ledger {
    mode: GameMode,
    payouts: Vec<Payout>,
    net: BTreeMap<String, f64>,
}

impl Ledger {
    pub fn new(mode: GameMode, players: &[Player]) -> Self {
        Ledger {
            mode,
            payouts: Vec::new(),
            net: zero_ledger(players),
        }
    }

    /// Records `from` paying `to`. Rounds once; zero amounts and
    /// self-payments are dropped.
    pub fn pay(&mut self, from: &Player, to: &Player, amount: f64, game: &str) {
        let amount = round_money(amount);
        if amount <= 0.0 || from.id == to.id {
            return;
        }
        *self.net.entry(from.name.clone()).or_insert(0.0) -= amount;
        *self.net.entry(to.name.clone()).or_insert(0.0) += amount;
        self.payouts.push(Payout {
            from: from.name.clone(),
            to: to.name.clone(),
            amount,
            game: game.to_string(),
        });
    }

    /// Each loser pays `pot`, split evenly across the winners.
    pub fn pay_split(&mut self, losers: &[&Player], winners: &[&Player], pot: f64, game: &str) {
        if winners.is_empty() {
            return;
        }
        let share = pot / winners.len() as f64;
        for loser in losers {
            for winner in winners {
                self.pay(loser, winner, share, game);
            }
        }
    }

    pub fn finish(self) -> GameResult {
        let net = self
            .net
            .into_iter()
            .map(|(name, amount)| (name, round_money(amount)))
            .collect();
        GameResult {
            mode: self.mode,
            label: self.mode.label().to_string(),
            payouts: self.payouts,
            net,
        }
    }
}

/// Raw amounts owed between pairs, accumulated over holes.
#[derive(Default)]
pub struct Tally<'a> {
    // keyed by (lower id, higher id); positive means the first owes the second
    owed: BTreeMap<(&'a str, &'a str), (f64, &'a Player, &'a Player)>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Tally::default()
    }

    pub fn add(&mut self, from: &'a Player, to: &'a Player, amount: f64) {
        if from.id == to.id || amount == 0.0 {
            return;
        }
        let (first, second, signed) = if from.id < to.id {
            (from, to, amount)
        } else {
            (to, from, -amount)
        };
        self.owed
            .entry((first.id.as_str(), second.id.as_str()))
            .or_insert((0.0, first, second))
            .0 += signed;
    }

    /// `from` pays every player in `others` the same amount.
    pub fn add_each(&mut self, from: &'a Player, others: &[&'a Player], amount: f64) {
        for to in others {
            self.add(from, to, amount);
        }
    }

    pub fn settle(self, ledger: &mut Ledger, game: &str) {
        for ((a, b), (amount, first, second)) in self.owed {
            trace!("{}: {} vs {} nets {:.2}", game, a, b, amount);
            if amount > 0.0 {
                ledger.pay(first, second, amount, game);
            } else if amount < 0.0 {
                ledger.pay(second, first, -amount, game);
            }
        }
    }
}
