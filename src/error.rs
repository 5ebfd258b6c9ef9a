use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettleError {
    #[error("Duplicate player id: {0}")]
    DuplicatePlayerId(String),

    #[error("Duplicate player name: {0}")]
    DuplicatePlayerName(String),

    #[error("Unknown player id: {0}")]
    UnknownPlayer(String),

    #[error("Team {0} has no players")]
    EmptyTeam(char),

    #[error("Player {0} is on both teams")]
    OverlappingTeams(String),

    #[error("Invalid press holes {start}-{end} (must be 1 <= start <= end <= 18)")]
    InvalidPressRange { start: usize, end: usize },

    #[error("Invalid press tag: {0}")]
    InvalidPressTag(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type SettleResult<T> = Result<T, SettleError>;
