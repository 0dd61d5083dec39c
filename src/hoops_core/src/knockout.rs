//! Single-elimination bracket built from seeding pots.
//!
//! The opening round crosses pots: the first pot meets the last, the second
//! meets the second-to-last, slot by slot. Every later round pairs the
//! winner of match `k` with the winner of match `k + half`, so teams from
//! the same half of the draw can only meet in the final.

use serde::Serialize;

use crate::error::{Result, TournamentError};
use crate::qualifiers::Pot;
use crate::simulator::{MatchOutcome, MatchResolver};
use crate::team::Team;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Any round above the quarter-finals, by number of teams
    RoundOf(usize),
    QuarterFinal,
    SemiFinal,
    ThirdPlace,
    Final,
}

impl Stage {
    fn for_matches(matches: usize) -> Stage {
        match matches {
            1 => Stage::Final,
            2 => Stage::SemiFinal,
            4 => Stage::QuarterFinal,
            n => Stage::RoundOf(n * 2),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::RoundOf(n) => write!(f, "Round of {}", n),
            Stage::QuarterFinal => f.write_str("Quarter-Finals"),
            Stage::SemiFinal => f.write_str("Semi-Finals"),
            Stage::ThirdPlace => f.write_str("Third-Place Match"),
            Stage::Final => f.write_str("Final"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KnockoutRound {
    pub stage: Stage,
    pub matches: Vec<MatchOutcome>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Medals {
    pub gold: Team,
    pub silver: Team,
    pub bronze: Team,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KnockoutResult {
    /// Elimination rounds before the final, earliest first
    pub rounds: Vec<KnockoutRound>,
    pub third_place: MatchOutcome,
    pub final_match: MatchOutcome,
    pub medals: Medals,
}

impl KnockoutResult {
    pub fn round(&self, stage: Stage) -> Option<&KnockoutRound> {
        self.rounds.iter().find(|r| r.stage == stage)
    }

    pub fn quarter_finals(&self) -> &[MatchOutcome] {
        self.round(Stage::QuarterFinal)
            .map(|r| r.matches.as_slice())
            .unwrap_or(&[])
    }

    pub fn semi_finals(&self) -> &[MatchOutcome] {
        self.round(Stage::SemiFinal)
            .map(|r| r.matches.as_slice())
            .unwrap_or(&[])
    }
}

/// Opening-round pairings from pots ordered strongest first.
pub fn opening_pairings(pots: &[Pot]) -> Result<Vec<(Team, Team)>> {
    validate_pots(pots)?;

    let last = pots.len() - 1;
    let mut pairings = Vec::new();
    for i in 0..pots.len() / 2 {
        let (high, low) = (&pots[i], &pots[last - i]);
        for (a, b) in high.teams.iter().zip(&low.teams) {
            pairings.push((a.clone(), b.clone()));
        }
    }
    Ok(pairings)
}

fn validate_pots(pots: &[Pot]) -> Result<()> {
    if pots.is_empty() || pots.len() % 2 != 0 {
        return Err(TournamentError::InvalidFormat(format!(
            "knockout needs an even number of pots, got {}",
            pots.len()
        )));
    }
    let pot_size = pots[0].teams.len();
    if pot_size == 0 || pots.iter().any(|p| p.teams.len() != pot_size) {
        return Err(TournamentError::InvalidFormat(
            "pots must be non-empty and equally sized".to_string(),
        ));
    }
    let entrants = pots.len() * pot_size;
    if entrants < 4 || !entrants.is_power_of_two() {
        return Err(TournamentError::NotEnoughQualifiers {
            needed: entrants.next_power_of_two().max(4),
            found: entrants,
        });
    }
    Ok(())
}

fn play_round<M: MatchResolver>(
    pairings: &[(Team, Team)],
    resolver: &mut M,
) -> Result<Vec<MatchOutcome>> {
    pairings.iter().map(|(a, b)| resolver.play(a, b)).collect()
}

/// Play the whole bracket: opening round, later rounds, final, then the
/// third-place match between the semi-final losers.
pub fn run_knockout<M: MatchResolver>(pots: &[Pot], resolver: &mut M) -> Result<KnockoutResult> {
    let mut current = play_round(&opening_pairings(pots)?, resolver)?;
    let mut rounds = Vec::new();

    while current.len() > 1 {
        let half = current.len() / 2;
        let pairings: Vec<(Team, Team)> = (0..half)
            .map(|k| (current[k].winner().clone(), current[k + half].winner().clone()))
            .collect();
        let next = play_round(&pairings, resolver)?;

        let round = KnockoutRound {
            stage: Stage::for_matches(current.len()),
            matches: current,
        };
        log::info!("{}: {} matches played", round.stage, round.matches.len());
        rounds.push(round);
        current = next;
    }

    let final_match = current
        .pop()
        .ok_or_else(|| TournamentError::InvalidFormat("bracket produced no final".to_string()))?;
    let semis = match rounds.last() {
        Some(round) if round.matches.len() == 2 => &round.matches,
        _ => {
            return Err(TournamentError::InvalidFormat(
                "bracket has no semi-finals".to_string(),
            ))
        }
    };
    let third_place = resolver.play(semis[0].loser(), semis[1].loser())?;

    let medals = Medals {
        gold: final_match.winner().clone(),
        silver: final_match.loser().clone(),
        bronze: third_place.winner().clone(),
    };
    log::info!(
        "Medals: gold {}, silver {}, bronze {}",
        medals.gold,
        medals.silver,
        medals.bronze
    );

    Ok(KnockoutResult {
        rounds,
        third_place,
        final_match,
        medals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::pot_label;
    use crate::group_stage::tests::FavoriteWins;

    /// First-named team always wins; records every pairing in play order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, String)>,
    }

    impl MatchResolver for Recorder {
        fn play(&mut self, team1: &Team, team2: &Team) -> Result<MatchOutcome> {
            self.calls.push((team1.name.clone(), team2.name.clone()));
            MatchOutcome::new(team1.clone(), team2.clone(), 90, 70)
        }
    }

    fn pots_of(names: &[&[&str]]) -> Vec<Pot> {
        names
            .iter()
            .enumerate()
            .map(|(i, pot)| Pot {
                label: pot_label(i),
                teams: pot.iter().map(|n| Team::new(*n, 1.0)).collect(),
            })
            .collect()
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    fn eight_pots() -> Vec<Pot> {
        pots_of(&[
            &["P1a", "P1b"],
            &["P2a", "P2b"],
            &["P3a", "P3b"],
            &["P4a", "P4b"],
        ])
    }

    #[test]
    fn test_quarter_final_seed_crossing() {
        let pairings: Vec<(String, String)> = opening_pairings(&eight_pots())
            .unwrap()
            .into_iter()
            .map(|(a, b)| (a.name, b.name))
            .collect();
        assert_eq!(
            pairings,
            vec![
                pair("P1a", "P4a"),
                pair("P1b", "P4b"),
                pair("P2a", "P3a"),
                pair("P2b", "P3b"),
            ]
        );
    }

    #[test]
    fn test_bracket_play_order_and_medals() {
        let mut recorder = Recorder::default();
        let result = run_knockout(&eight_pots(), &mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            vec![
                pair("P1a", "P4a"),
                pair("P1b", "P4b"),
                pair("P2a", "P3a"),
                pair("P2b", "P3b"),
                // winner QF1 vs winner QF3, winner QF2 vs winner QF4
                pair("P1a", "P2a"),
                pair("P1b", "P2b"),
                pair("P1a", "P1b"),
                pair("P2a", "P2b"),
            ]
        );

        assert_eq!(result.rounds.len(), 2);
        assert_eq!(result.quarter_finals().len(), 4);
        assert_eq!(result.semi_finals().len(), 2);
        assert_eq!(result.final_match.winner().name, "P1a");
        assert_eq!(result.third_place.loser().name, "P2b");
        assert_eq!(result.medals.gold.name, "P1a");
        assert_eq!(result.medals.silver.name, "P1b");
        assert_eq!(result.medals.bronze.name, "P2a");
    }

    #[test]
    fn test_four_team_bracket_starts_at_semis() {
        let pots = pots_of(&[&["A", "B"], &["C", "D"]]);
        let result = run_knockout(&pots, &mut Recorder::default()).unwrap();

        assert!(result.quarter_finals().is_empty());
        assert_eq!(result.semi_finals().len(), 2);
        assert_eq!(result.medals.gold.name, "A");
        assert_eq!(result.medals.silver.name, "B");
        assert_eq!(result.medals.bronze.name, "C");
    }

    #[test]
    fn test_sixteen_team_bracket() {
        let names: Vec<String> = (1..=16).map(|i| format!("S{i:02}")).collect();
        let pots: Vec<Pot> = names
            .chunks(2)
            .enumerate()
            .map(|(i, block)| Pot {
                label: pot_label(i),
                teams: block
                    .iter()
                    .map(|n| Team::new(n.clone(), n[1..].parse::<f64>().unwrap()))
                    .collect(),
            })
            .collect();

        let result = run_knockout(&pots, &mut FavoriteWins).unwrap();
        let stages: Vec<Stage> = result.rounds.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::RoundOf(16), Stage::QuarterFinal, Stage::SemiFinal]
        );
        assert_eq!(result.medals.gold.name, "S01");
        assert_eq!(result.medals.silver.name, "S02");
        assert_eq!(result.medals.bronze.name, "S03");
    }

    #[test]
    fn test_malformed_pots_rejected() {
        let odd = pots_of(&[&["A", "B"], &["C", "D"], &["E", "F"]]);
        assert!(matches!(
            run_knockout(&odd, &mut Recorder::default()),
            Err(TournamentError::InvalidFormat(_))
        ));

        let uneven = pots_of(&[&["A", "B"], &["C"]]);
        assert!(run_knockout(&uneven, &mut Recorder::default()).is_err());

        let tiny = pots_of(&[&["A"], &["B"]]);
        assert!(matches!(
            run_knockout(&tiny, &mut Recorder::default()),
            Err(TournamentError::NotEnoughQualifiers { found: 2, .. })
        ));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::QuarterFinal.to_string(), "Quarter-Finals");
        assert_eq!(Stage::RoundOf(16).to_string(), "Round of 16");
    }
}
