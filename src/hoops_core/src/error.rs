use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("group {group} has no teams")]
    EmptyGroup { group: String },

    #[error("group {group} has {size} teams, at least {required} required")]
    GroupTooSmall {
        group: String,
        size: usize,
        required: usize,
    },

    #[error("expected {expected} groups, found {found}")]
    GroupCount { expected: usize, found: usize },

    #[error("team {team} appears more than once")]
    DuplicateTeam { team: String },

    #[error("team {team} has invalid ranking {ranking}")]
    InvalidRanking { team: String, ranking: f64 },

    #[error("knockout needs {needed} qualifiers, found {found}")]
    NotEnoughQualifiers { needed: usize, found: usize },

    #[error("invalid tournament format: {0}")]
    InvalidFormat(String),

    #[error("winner score {winner_score} must exceed loser score {loser_score}")]
    InvalidScore { winner_score: u32, loser_score: u32 },

    #[error("team {team} cannot play itself")]
    SelfMatch { team: String },

    #[error("score totals for team {team} exceed the counter range")]
    ScoreOverflow { team: String },

    #[error("internal error: team {team} missing from standings")]
    UnknownTeam { team: String },

    #[error("failed to parse groups: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TournamentError {
    /// True for invariant violations that correct wiring can never produce.
    pub fn is_internal(&self) -> bool {
        matches!(self, TournamentError::UnknownTeam { .. })
    }
}
