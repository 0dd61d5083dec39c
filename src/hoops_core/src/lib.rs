//! Hoops Core - group stage + knockout basketball tournament simulation.
//!
//! Teams are seeded by world ranking, play a round robin in their group,
//! and the best group finishers are drawn into pots for a seed-crossed
//! elimination bracket. All randomness comes through an injected
//! [`RandomSource`], so a seed reproduces a whole tournament.

pub mod config;
pub mod constants;
pub mod error;
pub mod group_stage;
pub mod knockout;
pub mod qualifiers;
pub mod report;
pub mod rng;
pub mod simulator;
pub mod standings;
pub mod team;
pub mod tournament;
pub mod win_prob;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "python")]
mod python;

pub use config::{RankingOrientation, ScoringModel, SimulationConfig, TournamentFormat};
pub use constants::{BASE_SCORE, BRACKET_SIZE, ELO_SCALE, MAX_MARGIN, WIN_POINTS};
pub use error::{Result, TournamentError};
pub use group_stage::{Group, GroupResult};
pub use knockout::{KnockoutResult, KnockoutRound, Medals, Stage};
pub use qualifiers::Pot;
pub use rng::{seeded_rng, RandomSource};
pub use simulator::{EloSimulator, MatchOutcome, MatchResolver};
pub use standings::TeamStats;
pub use team::Team;
pub use tournament::{Tournament, TournamentResult};
pub use win_prob::calculate_win_prob;
