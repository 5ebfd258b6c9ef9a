//! Round inputs: players, scorecards, pars, per-hole annotations, team
//! rosters and presses. Raw JSON input is validated once here, so the
//! calculators can trust what they read.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::GameEntry;
use crate::error::{SettleError, SettleResult};
use crate::model::{Player, PlayerId};
use crate::scoring::{DEFAULT_PAR, HOLES};

// ---------------------------------------------------------------------------
// Hole sheets
// ---------------------------------------------------------------------------

/// One optional value per hole. Deserializes from an array of up to 18
/// entries, padding the rest with `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleSheet<T>([Option<T>; HOLES]);

pub type Scorecard = HoleSheet<i32>;

impl<T> HoleSheet<T> {
    pub fn new() -> Self {
        HoleSheet(std::array::from_fn(|_| None))
    }

    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut iter = values.into_iter();
        HoleSheet(std::array::from_fn(|_| iter.next()))
    }

    pub fn get(&self, hole: usize) -> Option<&T> {
        self.0.get(hole).and_then(|v| v.as_ref())
    }

    pub fn set(&mut self, hole: usize, value: T) {
        if let Some(slot) = self.0.get_mut(hole) {
            *slot = Some(value);
        }
    }

    pub fn clear(&mut self, hole: usize) {
        if let Some(slot) = self.0.get_mut(hole) {
            *slot = None;
        }
    }

    pub fn with(mut self, hole: usize, value: T) -> Self {
        self.set(hole, value);
        self
    }

    /// Present entries with their 0-based hole index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(hole, v)| v.as_ref().map(|v| (hole, v)))
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl<T> Default for HoleSheet<T> {
    fn default() -> Self {
        HoleSheet::new()
    }
}

impl<T> From<Vec<Option<T>>> for HoleSheet<T> {
    fn from(holes: Vec<Option<T>>) -> Self {
        let mut iter = holes.into_iter();
        HoleSheet(std::array::from_fn(|_| iter.next().flatten()))
    }
}

impl<T> From<[Option<T>; HOLES]> for HoleSheet<T> {
    fn from(holes: [Option<T>; HOLES]) -> Self {
        HoleSheet(holes)
    }
}

impl<T: Serialize> Serialize for HoleSheet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for HoleSheet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let holes = Vec::<Option<T>>::deserialize(deserializer)?;
        Ok(HoleSheet::from(holes))
    }
}

/// Par per hole, defaulting to 4 for any hole not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pars([i32; HOLES]);

impl Pars {
    pub fn new(pars: [i32; HOLES]) -> Self {
        Pars(pars)
    }

    pub fn get(&self, hole: usize) -> i32 {
        self.0.get(hole).copied().unwrap_or(DEFAULT_PAR)
    }

    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }
}

impl Default for Pars {
    fn default() -> Self {
        Pars([DEFAULT_PAR; HOLES])
    }
}

impl From<Vec<i32>> for Pars {
    fn from(pars: Vec<i32>) -> Self {
        let mut iter = pars.into_iter();
        Pars(std::array::from_fn(|_| iter.next().unwrap_or(DEFAULT_PAR)))
    }
}

impl Serialize for Pars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Pars::from(Vec::<i32>::deserialize(deserializer)?))
    }
}

// ---------------------------------------------------------------------------
// Per-hole annotations
// ---------------------------------------------------------------------------

/// Wolf for the hole; no partner means a lone wolf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WolfHole {
    pub wolf_player_id: PlayerId,
    #[serde(default)]
    pub partner_id: Option<PlayerId>,
}

impl WolfHole {
    pub fn lone(wolf: &str) -> Self {
        WolfHole {
            wolf_player_id: wolf.to_string(),
            partner_id: None,
        }
    }

    pub fn partnered(wolf: &str, partner: &str) -> Self {
        WolfHole {
            wolf_player_id: wolf.to_string(),
            partner_id: Some(partner.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BbbHole {
    pub bingo_id: Option<PlayerId>,
    pub bango_id: Option<PlayerId>,
    pub bongo_id: Option<PlayerId>,
}

impl BbbHole {
    pub fn awards(&self) -> impl Iterator<Item = &PlayerId> {
        [&self.bingo_id, &self.bango_id, &self.bongo_id]
            .into_iter()
            .flatten()
    }
}

/// Three-putters on the hole in order; the last one takes the snake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnakeHole {
    pub three_putter_ids: Vec<PlayerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtpHole {
    pub winner_id: Option<PlayerId>,
}

/// Trouble tags per player. Only the count matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TroubleHole(pub HashMap<PlayerId, Vec<String>>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArniesHole {
    pub qualified_player_ids: BTreeSet<PlayerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankerHole {
    pub banker_id: Option<PlayerId>,
    pub bet_override: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DotsHole {
    pub sandy_player_ids: BTreeSet<PlayerId>,
    pub greenie_id: Option<PlayerId>,
}

/// One typed hole sheet per manually tracked game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Annotations {
    pub wolf: HoleSheet<WolfHole>,
    pub bingo_bango_bongo: HoleSheet<BbbHole>,
    pub snake: HoleSheet<SnakeHole>,
    pub ctp: HoleSheet<CtpHole>,
    pub trouble: HoleSheet<TroubleHole>,
    pub arnies: HoleSheet<ArniesHole>,
    pub banker: HoleSheet<BankerHole>,
    pub dots: HoleSheet<DotsHole>,
}

// ---------------------------------------------------------------------------
// Presses
// ---------------------------------------------------------------------------

/// Which game a press is layered on. Serialized as `"nassau"` or
/// `"h2h:<playerA>:<playerB>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PressGame {
    Nassau,
    HeadToHead { a: PlayerId, b: PlayerId },
}

impl PressGame {
    pub fn head_to_head(a: &str, b: &str) -> Self {
        PressGame::HeadToHead {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// True if this press belongs to the head-to-head match between `x` and `y`
    /// in either order.
    pub fn is_match(&self, x: &str, y: &str) -> bool {
        match self {
            PressGame::HeadToHead { a, b } => (a == x && b == y) || (a == y && b == x),
            PressGame::Nassau => false,
        }
    }
}

impl fmt::Display for PressGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressGame::Nassau => write!(f, "nassau"),
            PressGame::HeadToHead { a, b } => write!(f, "h2h:{}:{}", a, b),
        }
    }
}

impl FromStr for PressGame {
    type Err = SettleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            ["nassau"] => Ok(PressGame::Nassau),
            ["h2h" | "headToHead", a, b] if !a.is_empty() && !b.is_empty() && a != b => {
                Ok(PressGame::head_to_head(a, b))
            }
            _ => Err(SettleError::InvalidPressTag(s.to_string())),
        }
    }
}

impl TryFrom<String> for PressGame {
    type Error = SettleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PressGame> for String {
    fn from(game: PressGame) -> String {
        game.to_string()
    }
}

/// An independent side bet over holes `start_hole..=end_hole` (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Press {
    pub game: PressGame,
    pub start_hole: usize,
    pub end_hole: usize,
    pub bet_amount: f64,
}

impl Press {
    pub fn new(game: PressGame, start_hole: usize, end_hole: usize, bet_amount: f64) -> Self {
        Press {
            game,
            start_hole,
            end_hole,
            bet_amount,
        }
    }

    /// 0-based hole range.
    pub fn holes(&self) -> Range<usize> {
        self.start_hole.saturating_sub(1)..self.end_hole
    }

    fn validate(&self, round: &Round) -> SettleResult<()> {
        if self.start_hole < 1 || self.start_hole > self.end_hole || self.end_hole > HOLES {
            return Err(SettleError::InvalidPressRange {
                start: self.start_hole,
                end: self.end_hole,
            });
        }
        if !(self.bet_amount >= 0.0) {
            return Err(SettleError::InvalidValue(format!(
                "press stake must be non-negative, got {}",
                self.bet_amount
            )));
        }
        if let PressGame::HeadToHead { a, b } = &self.game {
            for id in [a, b] {
                if round.player(id).is_none() {
                    return Err(SettleError::UnknownPlayer(id.clone()));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Two sides of a team game: non-empty, disjoint, registered players only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Teams {
    a: Vec<PlayerId>,
    b: Vec<PlayerId>,
}

impl Teams {
    fn new(players: &[Player], a: &[PlayerId], b: &[PlayerId]) -> SettleResult<Self> {
        if a.is_empty() {
            return Err(SettleError::EmptyTeam('A'));
        }
        if b.is_empty() {
            return Err(SettleError::EmptyTeam('B'));
        }
        let mut seen = HashSet::new();
        for id in a.iter().chain(b) {
            if !players.iter().any(|p| &p.id == id) {
                return Err(SettleError::UnknownPlayer(id.clone()));
            }
            if !seen.insert(id) {
                return Err(SettleError::OverlappingTeams(id.clone()));
            }
        }
        Ok(Teams {
            a: a.to_vec(),
            b: b.to_vec(),
        })
    }

    /// First half of the roster against the second half. Needs an even
    /// roster of at least two.
    pub fn split_roster(players: &[Player]) -> Option<Self> {
        if players.len() < 2 || players.len() % 2 != 0 {
            return None;
        }
        let (a, b) = players.split_at(players.len() / 2);
        Some(Teams {
            a: a.iter().map(|p| p.id.clone()).collect(),
            b: b.iter().map(|p| p.id.clone()).collect(),
        })
    }

    pub fn a(&self) -> &[PlayerId] {
        &self.a
    }

    pub fn b(&self) -> &[PlayerId] {
        &self.b
    }
}

// ---------------------------------------------------------------------------
// Round
// ---------------------------------------------------------------------------

/// Everything a settlement needs, already validated.
#[derive(Debug, Clone, Default)]
pub struct Round {
    players: Vec<Player>,
    scores: HashMap<PlayerId, Scorecard>,
    pars: Pars,
    annotations: Annotations,
    vegas_teams: Option<Teams>,
    best_ball_teams: Option<Teams>,
    scotch_teams: Option<Teams>,
    presses: Vec<Press>,
}

impl Round {
    pub fn new(players: Vec<Player>) -> SettleResult<Self> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for p in &players {
            if !ids.insert(p.id.as_str()) {
                return Err(SettleError::DuplicatePlayerId(p.id.clone()));
            }
            if !names.insert(p.name.as_str()) {
                return Err(SettleError::DuplicatePlayerName(p.name.clone()));
            }
        }
        Ok(Round {
            players,
            ..Default::default()
        })
    }

    pub fn with_pars(mut self, pars: Pars) -> Self {
        self.pars = pars;
        self
    }

    pub fn with_scores(mut self, id: &str, card: Scorecard) -> SettleResult<Self> {
        if self.player(id).is_none() {
            return Err(SettleError::UnknownPlayer(id.to_string()));
        }
        self.scores.insert(id.to_string(), card);
        Ok(self)
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_vegas_teams(mut self, a: &[PlayerId], b: &[PlayerId]) -> SettleResult<Self> {
        self.vegas_teams = Some(Teams::new(&self.players, a, b)?);
        Ok(self)
    }

    pub fn with_best_ball_teams(mut self, a: &[PlayerId], b: &[PlayerId]) -> SettleResult<Self> {
        self.best_ball_teams = Some(Teams::new(&self.players, a, b)?);
        Ok(self)
    }

    pub fn with_scotch_teams(mut self, a: &[PlayerId], b: &[PlayerId]) -> SettleResult<Self> {
        self.scotch_teams = Some(Teams::new(&self.players, a, b)?);
        Ok(self)
    }

    pub fn with_press(mut self, press: Press) -> SettleResult<Self> {
        press.validate(&self)?;
        self.presses.push(press);
        Ok(self)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn card(&self, id: &str) -> Option<&Scorecard> {
        self.scores.get(id)
    }

    pub fn score(&self, id: &str, hole: usize) -> Option<i32> {
        self.scores.get(id).and_then(|card| card.get(hole)).copied()
    }

    /// Scores for `ids` on `hole`, or `None` if any of them is missing.
    pub fn hole_scores<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a PlayerId>,
        hole: usize,
    ) -> Option<Vec<i32>> {
        ids.into_iter().map(|id| self.score(id, hole)).collect()
    }

    /// Every player's score on `hole`, or `None` unless the whole field posted.
    pub fn field_scores(&self, hole: usize) -> Option<Vec<(&Player, i32)>> {
        self.players
            .iter()
            .map(|p| self.score(&p.id, hole).map(|s| (p, s)))
            .collect()
    }

    pub fn par(&self, hole: usize) -> i32 {
        self.pars.get(hole)
    }

    pub fn pars(&self) -> &Pars {
        &self.pars
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn vegas_teams(&self) -> Option<Teams> {
        self.vegas_teams
            .clone()
            .or_else(|| Teams::split_roster(&self.players))
    }

    pub fn best_ball_teams(&self) -> Option<Teams> {
        self.best_ball_teams
            .clone()
            .or_else(|| Teams::split_roster(&self.players))
    }

    pub fn scotch_teams(&self) -> Option<Teams> {
        self.scotch_teams
            .clone()
            .or_else(|| Teams::split_roster(&self.players))
    }

    pub fn presses(&self) -> &[Press] {
        &self.presses
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtrasInput {
    #[serde(flatten)]
    pub annotations: Annotations,
    pub vegas_team_a: Vec<PlayerId>,
    pub vegas_team_b: Vec<PlayerId>,
    pub best_ball_team_a: Vec<PlayerId>,
    pub best_ball_team_b: Vec<PlayerId>,
    pub scotch_team_a: Vec<PlayerId>,
    pub scotch_team_b: Vec<PlayerId>,
    pub press_matches: Vec<Press>,
}

/// A round document as the caller stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInput {
    pub players: Vec<Player>,
    #[serde(default)]
    pub scores: HashMap<PlayerId, Scorecard>,
    #[serde(default)]
    pub pars: Pars,
    pub games: Vec<GameEntry>,
    #[serde(default)]
    pub extras: ExtrasInput,
}

impl RoundInput {
    pub fn from_json(json: &str) -> SettleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> SettleResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validates the document and splits it into the round and its game list.
    pub fn into_round(self) -> SettleResult<(Round, Vec<GameEntry>)> {
        let mut round = Round::new(self.players)?.with_pars(self.pars);
        for (id, card) in self.scores {
            round = round.with_scores(&id, card)?;
        }
        let extras = self.extras;
        round = round.with_annotations(extras.annotations);
        if let Some((a, b)) = roster_pair(&extras.vegas_team_a, &extras.vegas_team_b) {
            round = round.with_vegas_teams(a, b)?;
        }
        if let Some((a, b)) = roster_pair(&extras.best_ball_team_a, &extras.best_ball_team_b) {
            round = round.with_best_ball_teams(a, b)?;
        }
        if let Some((a, b)) = roster_pair(&extras.scotch_team_a, &extras.scotch_team_b) {
            round = round.with_scotch_teams(a, b)?;
        }
        for press in extras.press_matches {
            round = round.with_press(press)?;
        }
        Ok((round, self.games))
    }
}

/// `None` when neither side was given, so the roster split applies.
fn roster_pair<'a>(
    a: &'a [PlayerId],
    b: &'a [PlayerId],
) -> Option<(&'a [PlayerId], &'a [PlayerId])> {
    if a.is_empty() && b.is_empty() {
        None
    } else {
        Some((a, b))
    }
}
