use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};

/// A national team as listed in the groups file.
///
/// Field names follow the groups file (`Team`, `ISOCode`, `FIBARanking`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Team")]
    pub name: String,

    #[serde(rename = "ISOCode", default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,

    /// World ranking; orientation is set by `RankingOrientation`
    #[serde(rename = "FIBARanking")]
    pub ranking: f64,
}

impl Team {
    pub fn new(name: impl Into<String>, ranking: f64) -> Self {
        Team {
            name: name.into(),
            iso_code: None,
            ranking,
        }
    }

    /// Reject rankings the win probability cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.ranking.is_finite() {
            Ok(())
        } else {
            Err(TournamentError::InvalidRanking {
                team: self.name.clone(),
                ranking: self.ranking,
            })
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
