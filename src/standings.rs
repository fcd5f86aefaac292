use crate::bracket::Team;
use sleeper_api::Roster;
use std::cmp::Ordering;

/// Rank rosters into playoff seeds: wins first, season points-for as the
/// tiebreak (a full tie keeps league roster order, the sort being stable).
/// Returns the engine's reduced team view, seeded 1..=n.
pub fn playoff_seeds(rosters: &[Roster]) -> Vec<Team> {
    let mut ranked: Vec<&Roster> = rosters.iter().collect();
    ranked.sort_by(|a, b| {
        b.wins.cmp(&a.wins).then_with(|| {
            b.points_for
                .partial_cmp(&a.points_for)
                .unwrap_or(Ordering::Equal)
        })
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, roster)| Team {
            team_id: roster.roster_id,
            seed: Some((i + 1) as u8),
            season_points_for: roster.points_for,
            games_played: roster.games_played(),
        })
        .collect()
}
