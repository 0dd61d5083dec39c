//! Plain-text rendering of a finished tournament.

use std::fmt;

use crate::knockout::Stage;
use crate::simulator::MatchOutcome;
use crate::standings::TeamStats;
use crate::tournament::TournamentResult;

/// Display adapter that writes the full console report.
pub struct Report<'a>(pub &'a TournamentResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        for group in &result.groups {
            writeln!(f, "Group {} Results:", group.name)?;
            write_matches(f, &group.matches)?;
            writeln!(f, "Final Group Standings:")?;
            for (index, stats) in group.standings.iter().enumerate() {
                writeln!(f, "{}", standing_line(index, stats))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Pots:")?;
        for pot in &result.pots {
            let names: Vec<&str> = pot.teams.iter().map(|t| t.name.as_str()).collect();
            writeln!(f, "Pot {}: {}", pot.label, names.join(", "))?;
        }

        let knockout = &result.knockout;
        for round in &knockout.rounds {
            writeln!(f, "{}:", round.stage)?;
            write_matches(f, &round.matches)?;
        }
        writeln!(f, "{}:", Stage::ThirdPlace)?;
        writeln!(f, "{}", knockout.third_place)?;
        writeln!(f, "{}:", Stage::Final)?;
        writeln!(f, "{}", knockout.final_match)?;

        let medals = &knockout.medals;
        writeln!(f, "Medals:")?;
        writeln!(f, "Gold: {}", medals.gold)?;
        writeln!(f, "Silver: {}", medals.silver)?;
        writeln!(f, "Bronze: {}", medals.bronze)
    }
}

pub fn render(result: &TournamentResult) -> String {
    Report(result).to_string()
}

fn write_matches(f: &mut fmt::Formatter<'_>, matches: &[MatchOutcome]) -> fmt::Result {
    for outcome in matches {
        writeln!(f, "{}", outcome)?;
    }
    Ok(())
}

/// One standings row; `index` is 0-based.
pub fn standing_line(index: usize, stats: &TeamStats) -> String {
    format!(
        "{}. {} - Wins: {}, Losses: {}, Points: {}, Scored: {}, Allowed: {}, Difference: {}",
        index + 1,
        stats.team.name,
        stats.wins,
        stats.losses,
        stats.points,
        stats.scored,
        stats.allowed,
        stats.differential()
    )
}
