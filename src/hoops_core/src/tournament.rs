use serde::Serialize;
use std::path::Path;

use crate::config::SimulationConfig;
use crate::error::{Result, TournamentError};
use crate::group_stage::{self, Group, GroupResult};
use crate::knockout::{self, KnockoutResult};
use crate::qualifiers::{self, Pot};
use crate::rng::seeded_rng;
use crate::simulator::{EloSimulator, MatchResolver};
use crate::standings::TeamStats;

/// Validated groups plus the rules they are played under.
#[derive(Clone, Debug)]
pub struct Tournament {
    groups: Vec<Group>,
    config: SimulationConfig,
}

/// Everything a run produces, from group tables to medals.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentResult {
    pub groups: Vec<GroupResult>,
    pub qualifiers: Vec<TeamStats>,
    pub pots: Vec<Pot>,
    pub knockout: KnockoutResult,
}

impl Tournament {
    pub fn new(groups: Vec<Group>, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        if groups.len() != config.format.group_count {
            return Err(TournamentError::GroupCount {
                expected: config.format.group_count,
                found: groups.len(),
            });
        }
        group_stage::validate_groups(&groups, config.format.qualifiers_per_group)?;
        Ok(Tournament { groups, config })
    }

    pub fn from_json(json: &str, config: SimulationConfig) -> Result<Self> {
        Self::new(group_stage::parse_groups(json)?, config)
    }

    pub fn load(path: impl AsRef<Path>, config: SimulationConfig) -> Result<Self> {
        Self::new(group_stage::load_groups(path)?, config)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Simulate once with the Elo resolver. The same seed always yields the
    /// same result; `None` seeds from OS entropy.
    pub fn simulate(&self, seed: Option<u64>) -> Result<TournamentResult> {
        let mut resolver = EloSimulator::new(seeded_rng(seed), &self.config);
        self.simulate_with(&mut resolver)
    }

    /// Run group stage, qualifier draw and knockout with any resolver.
    pub fn simulate_with<M: MatchResolver>(&self, resolver: &mut M) -> Result<TournamentResult> {
        let format = &self.config.format;

        let groups = group_stage::run_group_stage(&self.groups, resolver)?;
        let qualifiers = qualifiers::select_qualifiers(&groups, format)?;
        let pots = qualifiers::draw_pots(&qualifiers, format.pot_size)?;
        let knockout = knockout::run_knockout(&pots, resolver)?;

        Ok(TournamentResult {
            groups,
            qualifiers,
            pots,
            knockout,
        })
    }
}
