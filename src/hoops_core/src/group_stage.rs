use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, TournamentError};
use crate::simulator::{MatchOutcome, MatchResolver};
use crate::standings::{self, TeamStats};
use crate::team::Team;

/// A named group; team order only fixes the round-robin schedule.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<Team>,
}

impl Group {
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Group {
            name: name.into(),
            teams,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupResult {
    pub name: String,
    pub standings: Vec<TeamStats>,
    pub matches: Vec<MatchOutcome>,
}

/// Parse a groups file: group name -> list of teams, in document order.
pub fn parse_groups(json: &str) -> Result<Vec<Group>> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    raw.into_iter()
        .map(|(name, teams)| -> Result<Group> {
            Ok(Group::new(name, serde_json::from_value(teams)?))
        })
        .collect()
}

pub fn load_groups(path: impl AsRef<Path>) -> Result<Vec<Group>> {
    let content = std::fs::read_to_string(path)?;
    parse_groups(&content)
}

/// Check a group list is usable: non-empty groups, at least `min_size` teams
/// each, unique names across all groups and finite rankings.
pub fn validate_groups(groups: &[Group], min_size: usize) -> Result<()> {
    let mut seen = HashSet::new();
    for group in groups {
        if group.teams.is_empty() {
            return Err(TournamentError::EmptyGroup {
                group: group.name.clone(),
            });
        }
        if group.teams.len() < min_size {
            return Err(TournamentError::GroupTooSmall {
                group: group.name.clone(),
                size: group.teams.len(),
                required: min_size,
            });
        }
        for team in &group.teams {
            team.validate()?;
            if !seen.insert(team.name.as_str()) {
                return Err(TournamentError::DuplicateTeam {
                    team: team.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Index pairs for a round robin of `n` teams: (0,1), (0,2), ..., (n-2,n-1).
pub fn round_robin_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect()
}

/// Play every pair in the group once and rank the final table.
pub fn run_group<M: MatchResolver>(group: &Group, resolver: &mut M) -> Result<GroupResult> {
    if group.teams.is_empty() {
        return Err(TournamentError::EmptyGroup {
            group: group.name.clone(),
        });
    }

    let mut table = standings::initialize(&group.teams);
    let mut matches = Vec::new();

    for (i, j) in round_robin_pairs(group.teams.len()) {
        let outcome = resolver.play(&group.teams[i], &group.teams[j])?;
        table = standings::apply_outcome(&table, &outcome)?;
        matches.push(outcome);
    }

    let standings = standings::rank(table);
    log::info!(
        "Group {}: {} matches, leader {}",
        group.name,
        matches.len(),
        standings[0].name()
    );

    Ok(GroupResult {
        name: group.name.clone(),
        standings,
        matches,
    })
}

/// Run every group in order.
pub fn run_group_stage<M: MatchResolver>(
    groups: &[Group],
    resolver: &mut M,
) -> Result<Vec<GroupResult>> {
    groups
        .iter()
        .map(|group| run_group(group, resolver))
        .collect()
}
