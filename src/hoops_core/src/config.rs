//! Tournament shape and simulation parameters.
//!
//! Every field has a default matching the four-group, eight-team format, so
//! an empty TOML document is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    BASE_SCORE, BRACKET_SIZE, ELO_SCALE, GROUP_COUNT, MAX_MARGIN, POT_SIZE, QUALIFIERS_PER_GROUP,
};
use crate::error::{Result, TournamentError};

/// Which end of the ranking scale is the stronger team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingOrientation {
    /// World-ranking style: 1 is the best team
    #[default]
    LowerIsStronger,
    /// Rating style: bigger numbers are better
    HigherIsStronger,
}

impl RankingOrientation {
    /// Strength advantage of a team ranked `a` over one ranked `b`.
    pub fn advantage(self, a: f64, b: f64) -> f64 {
        match self {
            RankingOrientation::LowerIsStronger => b - a,
            RankingOrientation::HigherIsStronger => a - b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentFormat {
    pub group_count: usize,
    pub qualifiers_per_group: usize,
    pub bracket_size: usize,
    pub pot_size: usize,
}

impl Default for TournamentFormat {
    fn default() -> Self {
        TournamentFormat {
            group_count: GROUP_COUNT,
            qualifiers_per_group: QUALIFIERS_PER_GROUP,
            bracket_size: BRACKET_SIZE,
            pot_size: POT_SIZE,
        }
    }
}

impl TournamentFormat {
    pub fn pot_count(&self) -> usize {
        self.bracket_size / self.pot_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.bracket_size < 4 || !self.bracket_size.is_power_of_two() {
            return Err(TournamentError::InvalidFormat(format!(
                "bracket size {} is not a power of two of at least 4",
                self.bracket_size
            )));
        }
        if self.pot_size == 0 || self.bracket_size % self.pot_size != 0 {
            return Err(TournamentError::InvalidFormat(format!(
                "pot size {} does not divide bracket size {}",
                self.pot_size, self.bracket_size
            )));
        }
        if self.pot_count() % 2 != 0 {
            return Err(TournamentError::InvalidFormat(format!(
                "{} pots cannot be paired for seed-crossing",
                self.pot_count()
            )));
        }
        if self.qualifiers_per_group == 0 {
            return Err(TournamentError::InvalidFormat(
                "at least one qualifier per group is required".to_string(),
            ));
        }
        let candidates = self.group_count * self.qualifiers_per_group;
        if candidates < self.bracket_size {
            return Err(TournamentError::InvalidFormat(format!(
                "{} groups x {} qualifiers cannot fill a bracket of {}",
                self.group_count, self.qualifiers_per_group, self.bracket_size
            )));
        }
        Ok(())
    }
}

/// Scoreline model: losers score `base_score`, winners add a uniform margin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringModel {
    pub base_score: u32,
    pub max_margin: u32,
}

impl Default for ScoringModel {
    fn default() -> Self {
        ScoringModel {
            base_score: BASE_SCORE,
            max_margin: MAX_MARGIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub format: TournamentFormat,
    pub scoring: ScoringModel,
    pub orientation: RankingOrientation,
    pub elo_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            format: TournamentFormat::default(),
            scoring: ScoringModel::default(),
            orientation: RankingOrientation::default(),
            elo_scale: ELO_SCALE,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.format.validate()?;
        if self.scoring.max_margin == 0 {
            return Err(TournamentError::InvalidFormat(
                "max margin must be at least 1".to_string(),
            ));
        }
        if self.scoring.base_score.checked_add(self.scoring.max_margin).is_none() {
            return Err(TournamentError::InvalidFormat(format!(
                "base score {} plus max margin {} overflows a score",
                self.scoring.base_score, self.scoring.max_margin
            )));
        }
        if !self.elo_scale.is_finite() || self.elo_scale <= 0.0 {
            return Err(TournamentError::InvalidFormat(format!(
                "elo scale {} must be positive",
                self.elo_scale
            )));
        }
        Ok(())
    }
}
