use serde::Serialize;

use crate::config::TournamentFormat;
use crate::constants::pot_label;
use crate::error::{Result, TournamentError};
use crate::group_stage::GroupResult;
use crate::standings::{self, TeamStats};
use crate::team::Team;

/// A block of consecutively ranked qualifiers used for the knockout draw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pot {
    pub label: char,
    pub teams: Vec<Team>,
}

/// Pool the top `qualifiers_per_group` of every group, re-rank the pool
/// with the standings order and keep the best `bracket_size`.
pub fn select_qualifiers(
    groups: &[GroupResult],
    format: &TournamentFormat,
) -> Result<Vec<TeamStats>> {
    let mut pool = Vec::with_capacity(groups.len() * format.qualifiers_per_group);
    for group in groups {
        if group.standings.len() < format.qualifiers_per_group {
            return Err(TournamentError::GroupTooSmall {
                group: group.name.clone(),
                size: group.standings.len(),
                required: format.qualifiers_per_group,
            });
        }
        pool.extend_from_slice(&group.standings[..format.qualifiers_per_group]);
    }

    if pool.len() < format.bracket_size {
        return Err(TournamentError::NotEnoughQualifiers {
            needed: format.bracket_size,
            found: pool.len(),
        });
    }

    let mut ranked = standings::rank(pool);
    ranked.truncate(format.bracket_size);
    Ok(ranked)
}

/// Split ranked qualifiers into pots of `pot_size`: ranks 1-2 go to the
/// first pot, 3-4 to the second and so on.
pub fn draw_pots(qualifiers: &[TeamStats], pot_size: usize) -> Result<Vec<Pot>> {
    if pot_size == 0 || qualifiers.len() % pot_size != 0 {
        return Err(TournamentError::InvalidFormat(format!(
            "{} qualifiers cannot be split into pots of {}",
            qualifiers.len(),
            pot_size
        )));
    }

    let pots: Vec<Pot> = qualifiers
        .chunks(pot_size)
        .enumerate()
        .map(|(i, block)| Pot {
            label: pot_label(i),
            teams: block.iter().map(|s| s.team.clone()).collect(),
        })
        .collect();

    for pot in &pots {
        let names: Vec<&str> = pot.teams.iter().map(|t| t.name.as_str()).collect();
        log::info!("Pot {}: {}", pot.label, names.join(", "));
    }
    Ok(pots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group_stage::tests::{group_of, FavoriteWins};
    use crate::group_stage::run_group;

    fn result_with(name: &str, rows: &[(u32, u32, u32)]) -> GroupResult {
        let standings = rows
            .iter()
            .enumerate()
            .map(|(i, &(points, scored, allowed))| TeamStats {
                points,
                scored,
                allowed,
                ..TeamStats::new(Team::new(format!("{name}{}", i + 1), 1.0))
            })
            .collect();
        GroupResult {
            name: name.to_string(),
            standings,
            matches: Vec::new(),
        }
    }

    fn names(table: &[TeamStats]) -> Vec<&str> {
        table.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn test_selects_top_three_and_reranks() {
        let groups = vec![
            result_with("A", &[(6, 300, 250), (4, 280, 270), (2, 260, 265), (0, 200, 255)]),
            result_with("B", &[(6, 320, 240), (4, 250, 260), (2, 270, 280), (0, 230, 290)]),
            result_with("C", &[(4, 290, 260), (4, 280, 275), (2, 240, 250), (2, 250, 270)]),
            result_with("D", &[(6, 310, 250), (2, 260, 270), (2, 255, 262), (2, 240, 280)]),
        ];
        let format = TournamentFormat::default();
        let qualifiers = select_qualifiers(&groups, &format).unwrap();

        assert_eq!(qualifiers.len(), 8);
        // 4th-placed teams never qualify
        assert!(qualifiers.iter().all(|q| !q.name().ends_with('4')));
        assert_eq!(
            names(&qualifiers),
            vec!["B1", "D1", "A1", "C1", "A2", "C2", "B2", "A3"]
        );
    }

    #[test]
    fn test_group_too_small_fails_fast() {
        let groups = vec![result_with("A", &[(2, 100, 90), (0, 90, 100)])];
        let format = TournamentFormat::default();
        assert!(matches!(
            select_qualifiers(&groups, &format),
            Err(TournamentError::GroupTooSmall { .. })
        ));
    }

    #[test]
    fn test_not_enough_qualifiers() {
        let groups: Vec<GroupResult> = ["A", "B"]
            .iter()
            .map(|g| run_group(&group_of(g, &[1.0, 2.0, 3.0, 4.0]), &mut FavoriteWins).unwrap())
            .collect();
        let format = TournamentFormat::default();
        assert!(matches!(
            select_qualifiers(&groups, &format),
            Err(TournamentError::NotEnoughQualifiers { needed: 8, found: 6 })
        ));
    }

    #[test]
    fn test_pots_by_rank_block() {
        let groups = vec![result_with(
            "Q",
            &[
                (16, 0, 0),
                (14, 0, 0),
                (12, 0, 0),
                (10, 0, 0),
                (8, 0, 0),
                (6, 0, 0),
                (4, 0, 0),
                (2, 0, 0),
            ],
        )];
        let pots = draw_pots(&groups[0].standings, 2).unwrap();

        assert_eq!(pots.len(), 4);
        let layout: Vec<(char, Vec<&str>)> = pots
            .iter()
            .map(|p| (p.label, p.teams.iter().map(|t| t.name.as_str()).collect()))
            .collect();
        assert_eq!(
            layout,
            vec![
                ('D', vec!["Q1", "Q2"]),
                ('E', vec!["Q3", "Q4"]),
                ('F', vec!["Q5", "Q6"]),
                ('G', vec!["Q7", "Q8"]),
            ]
        );
    }

    #[test]
    fn test_pots_reject_uneven_split() {
        let group = result_with("Q", &[(2, 0, 0), (2, 0, 0), (2, 0, 0)]);
        assert!(draw_pots(&group.standings, 2).is_err());
    }
}
