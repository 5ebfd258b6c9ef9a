//! Game selection and per-game option bags with their documented defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    Taxman,
    Nassau,
    Skins,
    Wolf,
    BingoBangoBongo,
    Snake,
    Vegas,
    Ctp,
    Trouble,
    Arnies,
    Banker,
    KeepScore,
    HeadToHead,
    BestBall,
    Stableford,
    Rabbit,
    Dots,
    Sixes,
    Nines,
    Scotch,
    AcesDeuces,
    Quota,
}

impl GameMode {
    pub const ALL: [GameMode; 22] = [
        GameMode::Taxman,
        GameMode::Nassau,
        GameMode::Skins,
        GameMode::Wolf,
        GameMode::BingoBangoBongo,
        GameMode::Snake,
        GameMode::Vegas,
        GameMode::Ctp,
        GameMode::Trouble,
        GameMode::Arnies,
        GameMode::Banker,
        GameMode::KeepScore,
        GameMode::HeadToHead,
        GameMode::BestBall,
        GameMode::Stableford,
        GameMode::Rabbit,
        GameMode::Dots,
        GameMode::Sixes,
        GameMode::Nines,
        GameMode::Scotch,
        GameMode::AcesDeuces,
        GameMode::Quota,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Taxman => "taxman",
            GameMode::Nassau => "nassau",
            GameMode::Skins => "skins",
            GameMode::Wolf => "wolf",
            GameMode::BingoBangoBongo => "bingoBangoBongo",
            GameMode::Snake => "snake",
            GameMode::Vegas => "vegas",
            GameMode::Ctp => "ctp",
            GameMode::Trouble => "trouble",
            GameMode::Arnies => "arnies",
            GameMode::Banker => "banker",
            GameMode::KeepScore => "keepScore",
            GameMode::HeadToHead => "headToHead",
            GameMode::BestBall => "bestBall",
            GameMode::Stableford => "stableford",
            GameMode::Rabbit => "rabbit",
            GameMode::Dots => "dots",
            GameMode::Sixes => "sixes",
            GameMode::Nines => "nines",
            GameMode::Scotch => "scotch",
            GameMode::AcesDeuces => "acesDeuces",
            GameMode::Quota => "quota",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Taxman => "Tax Man",
            GameMode::Nassau => "Nassau",
            GameMode::Skins => "Skins",
            GameMode::Wolf => "Wolf",
            GameMode::BingoBangoBongo => "Bingo Bango Bongo",
            GameMode::Snake => "Snake",
            GameMode::Vegas => "Vegas",
            GameMode::Ctp => "Closest to Pin",
            GameMode::Trouble => "Trouble",
            GameMode::Arnies => "Arnies",
            GameMode::Banker => "Banker",
            GameMode::KeepScore => "Keep Score",
            GameMode::HeadToHead => "Head to Head",
            GameMode::BestBall => "Best Ball",
            GameMode::Stableford => "Stableford",
            GameMode::Rabbit => "Rabbit",
            GameMode::Dots => "Dots",
            GameMode::Sixes => "Sixes",
            GameMode::Nines => "Nines",
            GameMode::Scotch => "Scotch",
            GameMode::AcesDeuces => "Aces & Deuces",
            GameMode::Quota => "Quota",
        }
    }

    /// Generic `betAmount` fallback for modes that use it.
    pub fn default_bet(self) -> f64 {
        match self {
            GameMode::Wolf
            | GameMode::BingoBangoBongo
            | GameMode::Trouble
            | GameMode::Stableford => 1.0,
            GameMode::AcesDeuces => 2.0,
            _ => 5.0,
        }
    }

    /// Whether the game reads a per-hole annotation sheet rather than scores.
    pub fn is_manually_tracked(self) -> bool {
        matches!(
            self,
            GameMode::Wolf
                | GameMode::BingoBangoBongo
                | GameMode::Snake
                | GameMode::Ctp
                | GameMode::Trouble
                | GameMode::Arnies
                | GameMode::Banker
                | GameMode::Dots
        )
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = SettleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SettleError::InvalidValue(format!("unknown game mode '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    Match,
    Stroke,
}

/// How tied extremes are treated in Aces & Deuces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TiePolicy {
    /// Every player tied for the extreme takes part.
    #[default]
    AllPlay,
    /// A tied extreme voids that side of the hole.
    Cancel,
}

pub const DEFAULT_TAX_AMOUNT: f64 = 10.0;
pub const DEFAULT_BET_PER_SKIN: f64 = 5.0;
pub const DEFAULT_BET_PER_DOT: f64 = 1.0;
pub const DEFAULT_BET_PER_SEGMENT: f64 = 5.0;
pub const DEFAULT_BET_PER_POINT: f64 = 1.0;
pub const DEFAULT_LONE_WOLF_WIN: f64 = 1.0;
pub const DEFAULT_LONE_WOLF_LOSS: f64 = 2.0;

/// Option bag for one selected game. Every field is optional; the accessors
/// resolve the per-mode defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub tax_amount: Option<f64>,
    pub bet_amount: Option<f64>,
    pub bet_per_skin: Option<f64>,
    pub bet_per_dot: Option<f64>,
    pub bet_per_segment: Option<f64>,
    pub bet_per_point: Option<f64>,
    pub front_bet: Option<f64>,
    pub back_bet: Option<f64>,
    pub total_bet: Option<f64>,
    pub match_mode: Option<MatchMode>,
    pub use_handicaps: Option<bool>,
    pub flip_bird: Option<bool>,
    pub tie_policy: Option<TiePolicy>,
    pub carryover: Option<bool>,
    pub lone_wolf_win: Option<f64>,
    pub lone_wolf_loss: Option<f64>,
    pub progressive: Option<bool>,
    pub birdie_dots: Option<bool>,
}

impl GameConfig {
    pub fn tax_amount(&self) -> f64 {
        self.tax_amount.unwrap_or(DEFAULT_TAX_AMOUNT)
    }

    pub fn bet_amount(&self, mode: GameMode) -> f64 {
        self.bet_amount.unwrap_or_else(|| mode.default_bet())
    }

    pub fn bet_per_skin(&self) -> f64 {
        self.bet_per_skin.unwrap_or(DEFAULT_BET_PER_SKIN)
    }

    pub fn bet_per_dot(&self) -> f64 {
        self.bet_per_dot.unwrap_or(DEFAULT_BET_PER_DOT)
    }

    pub fn bet_per_segment(&self) -> f64 {
        self.bet_per_segment.unwrap_or(DEFAULT_BET_PER_SEGMENT)
    }

    pub fn bet_per_point(&self) -> f64 {
        self.bet_per_point.unwrap_or(DEFAULT_BET_PER_POINT)
    }

    /// Nassau leg stakes (front, back, total), each falling back to `betAmount`.
    pub fn nassau_legs(&self) -> (f64, f64, f64) {
        let base = self.bet_amount(GameMode::Nassau);
        (
            self.front_bet.unwrap_or(base),
            self.back_bet.unwrap_or(base),
            self.total_bet.unwrap_or(base),
        )
    }

    pub fn match_mode(&self, mode: GameMode) -> MatchMode {
        self.match_mode.unwrap_or(match mode {
            GameMode::HeadToHead => MatchMode::Match,
            _ => MatchMode::Stroke,
        })
    }

    pub fn use_handicaps(&self) -> bool {
        self.use_handicaps.unwrap_or(false)
    }

    pub fn flip_bird(&self) -> bool {
        self.flip_bird.unwrap_or(false)
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy.unwrap_or_default()
    }

    pub fn carryover(&self) -> bool {
        self.carryover.unwrap_or(true)
    }

    pub fn lone_wolf_multipliers(&self) -> (f64, f64) {
        (
            self.lone_wolf_win.unwrap_or(DEFAULT_LONE_WOLF_WIN),
            self.lone_wolf_loss.unwrap_or(DEFAULT_LONE_WOLF_LOSS),
        )
    }

    pub fn progressive(&self) -> bool {
        self.progressive.unwrap_or(false)
    }

    pub fn birdie_dots(&self) -> bool {
        self.birdie_dots.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub mode: GameMode,
    #[serde(default)]
    pub config: GameConfig,
}

impl GameEntry {
    pub fn new(mode: GameMode) -> Self {
        GameEntry {
            mode,
            config: GameConfig::default(),
        }
    }

    pub fn with_config(mode: GameMode, config: GameConfig) -> Self {
        GameEntry { mode, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.as_str().parse::<GameMode>().unwrap(), mode);
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_documented_defaults() {
        let c = GameConfig::default();
        assert_eq!(c.tax_amount(), 10.0);
        assert_eq!(c.bet_amount(GameMode::Wolf), 1.0);
        assert_eq!(c.bet_amount(GameMode::BingoBangoBongo), 1.0);
        assert_eq!(c.bet_amount(GameMode::Ctp), 5.0);
        assert_eq!(c.bet_amount(GameMode::Trouble), 1.0);
        assert_eq!(c.bet_amount(GameMode::Stableford), 1.0);
        assert_eq!(c.bet_amount(GameMode::AcesDeuces), 2.0);
        assert_eq!(c.bet_amount(GameMode::Banker), 5.0);
        assert_eq!(c.bet_per_skin(), 5.0);
        assert_eq!(c.bet_per_dot(), 1.0);
        assert_eq!(c.bet_per_segment(), 5.0);
        assert_eq!(c.bet_per_point(), 1.0);
        assert_eq!(c.nassau_legs(), (5.0, 5.0, 5.0));
        assert_eq!(c.match_mode(GameMode::HeadToHead), MatchMode::Match);
        assert_eq!(c.match_mode(GameMode::BestBall), MatchMode::Stroke);
        assert!(!c.use_handicaps());
        assert!(!c.flip_bird());
        assert_eq!(c.tie_policy(), TiePolicy::AllPlay);
    }

    #[test]
    fn test_nassau_leg_overrides() {
        let c = GameConfig {
            bet_amount: Some(2.0),
            back_bet: Some(4.0),
            ..Default::default()
        };
        assert_eq!(c.nassau_legs(), (2.0, 4.0, 2.0));
    }
}
