/// Score every losing side is credited with
pub const BASE_SCORE: u32 = 70;

/// Largest winning margin; margins are drawn uniformly from 1..=MAX_MARGIN
pub const MAX_MARGIN: u32 = 30;

/// Rating gap that turns 10:1 odds in the logistic expectation
pub const ELO_SCALE: f64 = 400.0;

/// Standings points for a win (a loss is worth nothing)
pub const WIN_POINTS: u32 = 2;

/// Groups in the default tournament shape
pub const GROUP_COUNT: usize = 4;

/// Teams taken from each group into the qualifier pool
pub const QUALIFIERS_PER_GROUP: usize = 3;

/// Teams entering the knockout bracket
pub const BRACKET_SIZE: usize = 8;

/// Teams per seeding pot
pub const POT_SIZE: usize = 2;

/// Label of the first seeding pot; later pots follow alphabetically
pub const FIRST_POT_LABEL: char = 'D';

/// Label for pot `index` (0-based): D, E, F, G, ...
pub fn pot_label(index: usize) -> char {
    let offset = (index % 26) as u8;
    let base = FIRST_POT_LABEL as u8 - b'A';
    (b'A' + (base + offset) % 26) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_labels() {
        assert_eq!(pot_label(0), 'D');
        assert_eq!(pot_label(3), 'G');
        assert_eq!(pot_label(23), 'A');
    }
}
