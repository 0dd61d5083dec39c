//! Cumulative group statistics and the tie-break order.
//!
//! Stats are never mutated in place: [`apply_outcome`] hands back a fresh
//! table, so a `Team` shared between group and knockout records can't be
//! changed behind anyone's back.

use serde::Serialize;
use std::cmp::Ordering;

use crate::constants::WIN_POINTS;
use crate::error::{Result, TournamentError};
use crate::simulator::MatchOutcome;
use crate::team::Team;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamStats {
    pub team: Team,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub scored: u32,
    pub allowed: u32,
}

impl TeamStats {
    pub fn new(team: Team) -> Self {
        TeamStats {
            team,
            wins: 0,
            losses: 0,
            points: 0,
            scored: 0,
            allowed: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.team.name
    }

    /// Points scored minus points allowed
    pub fn differential(&self) -> i64 {
        self.scored as i64 - self.allowed as i64
    }

    fn credit_win(&self, scored: u32, allowed: u32) -> Result<Self> {
        Ok(TeamStats {
            wins: self.wins + 1,
            points: self.points + WIN_POINTS,
            scored: self.accumulate(self.scored, scored)?,
            allowed: self.accumulate(self.allowed, allowed)?,
            ..self.clone()
        })
    }

    fn credit_loss(&self, scored: u32, allowed: u32) -> Result<Self> {
        Ok(TeamStats {
            losses: self.losses + 1,
            scored: self.accumulate(self.scored, scored)?,
            allowed: self.accumulate(self.allowed, allowed)?,
            ..self.clone()
        })
    }

    fn accumulate(&self, total: u32, amount: u32) -> Result<u32> {
        total
            .checked_add(amount)
            .ok_or_else(|| TournamentError::ScoreOverflow {
                team: self.team.name.clone(),
            })
    }
}

/// Fresh zeroed stats for each team, in input order.
pub fn initialize(teams: &[Team]) -> Vec<TeamStats> {
    teams.iter().cloned().map(TeamStats::new).collect()
}

/// Stats after crediting `outcome` to its winner and loser.
pub fn apply_outcome(stats: &[TeamStats], outcome: &MatchOutcome) -> Result<Vec<TeamStats>> {
    let winner = position_of(stats, &outcome.winner().name)?;
    let loser = position_of(stats, &outcome.loser().name)?;
    let (won, lost) = outcome.score_pair();

    stats
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == winner {
                entry.credit_win(won, lost)
            } else if i == loser {
                entry.credit_loss(lost, won)
            } else {
                Ok(entry.clone())
            }
        })
        .collect()
}

fn position_of(stats: &[TeamStats], name: &str) -> Result<usize> {
    stats
        .iter()
        .position(|entry| entry.team.name == name)
        .ok_or_else(|| TournamentError::UnknownTeam {
            team: name.to_string(),
        })
}

/// Standings order: points, then differential, then points scored, all
/// descending. `Equal` only when all three match.
pub fn compare(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.differential().cmp(&a.differential()))
        .then_with(|| b.scored.cmp(&a.scored))
}

/// Sort into standings order. Full ties keep their encounter order.
pub fn rank(mut stats: Vec<TeamStats>) -> Vec<TeamStats> {
    stats.sort_by(compare);
    stats
}
