//! Settlement engine for golf side games: turns hole-by-hole scores and
//! per-hole annotations into payouts and a net-per-player ledger.

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod games;
pub mod ledger;
pub mod model;
pub mod press;
pub mod round;
pub mod scoring;

pub use crate::config::{GameConfig, GameEntry, GameMode, MatchMode, TiePolicy};
pub use crate::engine::{run_game, settle};
pub use crate::error::{SettleError, SettleResult};
pub use crate::model::{GameResult, MultiGameResults, Payout, Player, PlayerId};
pub use crate::round::{
    Annotations, ArniesHole, BankerHole, BbbHole, CtpHole, DotsHole, HoleSheet, Pars, Press,
    PressGame, Round, RoundInput, Scorecard, SnakeHole, Teams, TroubleHole, WolfHole,
};
pub use crate::scoring::HOLES;
