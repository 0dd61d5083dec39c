use serde::Serialize;

use crate::config::{RankingOrientation, ScoringModel, SimulationConfig};
use crate::error::{Result, TournamentError};
use crate::rng::{uniform_int_inclusive, RandomSource};
use crate::team::Team;
use crate::win_prob::calculate_win_prob;

/// Result of one game. The winner always outscores the loser.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchOutcome {
    winner: Team,
    loser: Team,
    score: (u32, u32),
}

impl MatchOutcome {
    pub fn new(winner: Team, loser: Team, winner_score: u32, loser_score: u32) -> Result<Self> {
        if winner.name == loser.name {
            return Err(TournamentError::SelfMatch { team: winner.name });
        }
        if winner_score <= loser_score {
            return Err(TournamentError::InvalidScore {
                winner_score,
                loser_score,
            });
        }
        Ok(MatchOutcome {
            winner,
            loser,
            score: (winner_score, loser_score),
        })
    }

    pub fn winner(&self) -> &Team {
        &self.winner
    }

    pub fn loser(&self) -> &Team {
        &self.loser
    }

    pub fn winner_score(&self) -> u32 {
        self.score.0
    }

    pub fn loser_score(&self) -> u32 {
        self.score.1
    }

    pub fn score_pair(&self) -> (u32, u32) {
        self.score
    }

    /// True if this game was played between `a` and `b`, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.winner.name == a && self.loser.name == b)
            || (self.winner.name == b && self.loser.name == a)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} ({}:{})",
            self.winner.name, self.loser.name, self.score.0, self.score.1
        )
    }
}

/// Decides a single game. Stages only see games through this trait.
pub trait MatchResolver {
    fn play(&mut self, team1: &Team, team2: &Team) -> Result<MatchOutcome>;
}

impl<M: MatchResolver + ?Sized> MatchResolver for &mut M {
    fn play(&mut self, team1: &Team, team2: &Team) -> Result<MatchOutcome> {
        (**self).play(team1, team2)
    }
}

/// Monte Carlo resolver: logistic win probability, flat loser score and a
/// uniform winning margin that ignores the ranking gap.
#[derive(Clone, Debug)]
pub struct EloSimulator<R> {
    rng: R,
    orientation: RankingOrientation,
    scale: f64,
    scoring: ScoringModel,
}

impl<R: RandomSource> EloSimulator<R> {
    pub fn new(rng: R, config: &SimulationConfig) -> Self {
        EloSimulator {
            rng,
            orientation: config.orientation,
            scale: config.elo_scale,
            scoring: config.scoring.clone(),
        }
    }
}

impl<R: RandomSource> MatchResolver for EloSimulator<R> {
    fn play(&mut self, team1: &Team, team2: &Team) -> Result<MatchOutcome> {
        let prob = calculate_win_prob(team1, team2, self.orientation, self.scale);
        let (winner, loser) = if self.rng.next_uniform() < prob {
            (team1, team2)
        } else {
            (team2, team1)
        };

        let margin = uniform_int_inclusive(&mut self.rng, self.scoring.max_margin);
        let loser_score = self.scoring.base_score;
        let winner_score = loser_score.checked_add(margin).ok_or_else(|| {
            TournamentError::InvalidFormat(format!(
                "winning score {loser_score} + {margin} overflows"
            ))
        })?;
        let outcome = MatchOutcome::new(winner.clone(), loser.clone(), winner_score, loser_score)?;

        log::debug!("{} (p={:.3} for {})", outcome, prob, team1.name);
        Ok(outcome)
    }
}
