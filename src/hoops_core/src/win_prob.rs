use crate::config::RankingOrientation;
use crate::team::Team;

/// Chance that `team1` beats `team2`: `1 / (1 + 10^(-advantage / scale))`,
/// with `advantage` read off the rankings under `orientation`. A gap of
/// `scale` ranking places gives 10:1 odds.
pub fn calculate_win_prob(
    team1: &Team,
    team2: &Team,
    orientation: RankingOrientation,
    scale: f64,
) -> f64 {
    logistic(orientation.advantage(team1.ranking, team2.ranking), scale)
}

/// Logistic expectation for a raw rating advantage.
pub fn logistic(advantage: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(-advantage / scale))
}
