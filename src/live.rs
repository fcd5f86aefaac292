use crate::bracket::outcomes::to_bracket_game_outcomes;
use crate::bracket::routing::apply_outcomes;
use crate::bracket::seeding::assign_seeds;
use crate::bracket::template::TEMPLATE;
use crate::bracket::Slot;
use crate::standings::playoff_seeds;
use log::debug;
use sleeper_api::client::{ApiResult, SleeperApi};
use sleeper_api::BracketMatch;
use std::collections::HashMap;

/// Build the bracket from the league's recorded playoff results.
///
/// Standings seed the template, then provider results apply one round per
/// `apply_outcomes` call in ascending round order, so each round's routing
/// sees the teams the previous round delivered. Weekly matchup scores, when
/// the league exposes a playoff start week, are stamped onto the slots being
/// decided before their round routes.
pub async fn live_bracket(client: &SleeperApi, league_id: &str) -> ApiResult<Vec<Slot>> {
    let league = client.fetch_league(league_id).await?;
    let rosters = client.fetch_rosters(league_id).await?;
    let teams = playoff_seeds(&rosters);
    let mut slots = assign_seeds(&teams, &TEMPLATE);

    let mut matches = client.fetch_winners_bracket(league_id).await?;
    matches.extend(client.fetch_losers_bracket(league_id).await?);
    let Some(last_round) = matches.iter().map(|m| m.round).max() else {
        debug!("league {league_id} has no playoff bracket yet");
        return Ok(slots);
    };

    for round in 1..=last_round {
        let round_matches: Vec<BracketMatch> = matches
            .iter()
            .copied()
            .filter(|m| m.round == round)
            .collect();
        let outcomes = to_bracket_game_outcomes(&slots, &round_matches);
        if outcomes.is_empty() {
            continue;
        }

        let week_points = match league.playoff_week_start {
            Some(start) => {
                let week = start + round - 1;
                let matchups = client.fetch_matchups(league_id, week).await?;
                matchups
                    .into_iter()
                    .map(|m| (m.roster_id, m.points))
                    .collect()
            }
            None => HashMap::new(),
        };

        for outcome in &outcomes {
            if let Some(slot) = slots.iter_mut().find(|s| s.id == outcome.slot) {
                stamp_week_points(slot, &week_points);
            }
        }

        debug!("applying {} playoff results for round {round}", outcomes.len());
        slots = apply_outcomes(&slots, &outcomes);
    }

    Ok(slots)
}

fn stamp_week_points(slot: &mut Slot, week_points: &HashMap<u64, f64>) {
    for pos in slot.positions.iter_mut().flatten() {
        if let Some(team_id) = pos.team_id
            && let Some(points) = week_points.get(&team_id)
        {
            pos.current_points = Some(*points);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{SlotId, TeamRef};
    use crate::bracket::template::template_slot;

    #[test]
    fn week_points_stamp_only_concrete_teams() {
        let mut slot = template_slot(SlotId::KeeperSplashback1).clone();
        slot.positions[0] = Some(TeamRef {
            team_id: Some(5),
            ..Default::default()
        });
        let points = HashMap::from([(5u64, 97.3)]);
        stamp_week_points(&mut slot, &points);
        assert_eq!(slot.positions[0].unwrap().current_points, Some(97.3));
        assert!(
            slot.positions[1].unwrap().current_points.is_none(),
            "the bye never scores"
        );
    }
}
