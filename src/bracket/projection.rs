use crate::bracket::routing::apply_outcomes;
use crate::bracket::rules::resolution_order;
use crate::bracket::seeding::assign_seeds;
use crate::bracket::template::TEMPLATE;
use crate::bracket::{GameOutcome, Slot, SlotId, Team, TeamRef};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// "If the season ended today" — speculative resolution by scoring average
// ---------------------------------------------------------------------------

/// Pick the winning side of a single game from projected scores.
///
/// A bye never beats a team. Higher score wins; an exact tie goes to the
/// numerically lower (better) seed, and a known seed beats an unknown one.
/// When nothing distinguishes the sides, index 0 (top/left) wins — an
/// explicit rule, not an accident.
pub fn pick_winner(top: &TeamRef, bottom: &TeamRef) -> usize {
    match (top.is_bye, bottom.is_bye) {
        (false, true) => return 0,
        (true, false) => return 1,
        _ => {}
    }

    let a = score_of(top);
    let b = score_of(bottom);
    if a > b {
        return 0;
    }
    if b > a {
        return 1;
    }

    match (top.seed, bottom.seed) {
        (Some(sa), Some(sb)) if sb < sa => 1,
        (None, Some(_)) => 1,
        _ => 0,
    }
}

fn score_of(team: &TeamRef) -> f64 {
    team.projected_points
        .or(team.current_points)
        .unwrap_or(0.0)
}

/// Resolve the whole bracket speculatively from season scoring averages.
///
/// Seeds the template, then scans the topological resolution order until a
/// full pass makes no progress: a slot resolves once both sides are concrete
/// (a team id, or the structural bye), stamping scores and routing the
/// winner/loser one step. Slots nothing feeds — a data-integrity bug in the
/// template or rules — simply stay unresolved; that is never a runtime error.
pub fn project_bracket(teams: &[Team]) -> Vec<Slot> {
    let averages: HashMap<u64, f64> = teams
        .iter()
        .map(|t| (t.team_id, t.projected_score()))
        .collect();

    let mut slots = assign_seeds(teams, &TEMPLATE);
    for slot in &mut slots {
        stamp_scores(slot, &averages);
    }

    let order = resolution_order();
    let mut resolved: HashSet<SlotId> = HashSet::new();

    loop {
        let mut progressed = false;
        for &id in &order {
            if resolved.contains(&id) {
                continue;
            }
            let Some(i) = slots.iter().position(|s| s.id == id) else {
                continue;
            };
            if !is_ready(&slots[i].positions[0]) || !is_ready(&slots[i].positions[1]) {
                continue;
            }

            stamp_scores(&mut slots[i], &averages);
            let top = slots[i].positions[0].unwrap_or_default();
            let bottom = slots[i].positions[1].unwrap_or_default();
            let outcome = GameOutcome {
                slot: id,
                winner_index: pick_winner(&top, &bottom),
            };
            slots = apply_outcomes(&slots, &[outcome]);
            resolved.insert(id);
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    slots
}

/// A position can be scored once it holds a real team or the structural bye.
fn is_ready(position: &Option<TeamRef>) -> bool {
    matches!(position, Some(p) if p.team_id.is_some() || p.is_bye)
}

/// Stamp a slot's concrete teams with their season average as both the
/// current and projected score. Byes stay scoreless.
fn stamp_scores(slot: &mut Slot, averages: &HashMap<u64, f64>) {
    for pos in slot.positions.iter_mut().flatten() {
        if let Some(team_id) = pos.team_id {
            let avg = averages.get(&team_id).copied().unwrap_or(0.0);
            pos.current_points = Some(avg);
            pos.projected_points = Some(avg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(seed: u8, avg: f64) -> Team {
        Team {
            team_id: seed as u64,
            seed: Some(seed),
            season_points_for: avg * 14.0,
            games_played: 14,
        }
    }

    /// Seed order tracks strength: seed 1 averages 120, each step down 5 less.
    fn twelve_teams() -> Vec<Team> {
        (1..=12).map(|s| team(s, 125.0 - 5.0 * s as f64)).collect()
    }

    fn slot<'a>(slots: &'a [Slot], id: SlotId) -> &'a Slot {
        slots.iter().find(|s| s.id == id).unwrap()
    }

    fn team_at(slots: &[Slot], id: SlotId, position: usize) -> Option<u64> {
        slot(slots, id).positions[position].and_then(|p| p.team_id)
    }

    #[test]
    fn higher_projected_score_wins() {
        let a = TeamRef {
            projected_points: Some(110.0),
            ..Default::default()
        };
        let b = TeamRef {
            projected_points: Some(111.5),
            ..Default::default()
        };
        assert_eq!(pick_winner(&a, &b), 1);
        assert_eq!(pick_winner(&b, &a), 0);
    }

    #[test]
    fn exact_tie_goes_to_the_better_seed() {
        let seed3 = TeamRef {
            seed: Some(3),
            current_points: Some(100.0),
            ..Default::default()
        };
        let seed7 = TeamRef {
            seed: Some(7),
            current_points: Some(100.0),
            ..Default::default()
        };
        assert_eq!(pick_winner(&seed3, &seed7), 0);
        assert_eq!(pick_winner(&seed7, &seed3), 1);
    }

    #[test]
    fn known_seed_beats_unknown_on_a_tie() {
        let seeded = TeamRef {
            seed: Some(6),
            ..Default::default()
        };
        let unseeded = TeamRef::default();
        assert_eq!(pick_winner(&seeded, &unseeded), 0);
        assert_eq!(pick_winner(&unseeded, &seeded), 1);
    }

    #[test]
    fn nothing_to_compare_defaults_to_top() {
        assert_eq!(pick_winner(&TeamRef::default(), &TeamRef::default()), 0);
    }

    #[test]
    fn a_bye_never_wins() {
        let team = TeamRef {
            team_id: Some(1),
            projected_points: Some(0.0),
            ..Default::default()
        };
        assert_eq!(pick_winner(&team, &TeamRef::bye()), 0);
        assert_eq!(pick_winner(&TeamRef::bye(), &team), 1);
    }

    #[test]
    fn projection_terminates_and_fills_every_reachable_slot() {
        let projected = project_bracket(&twelve_teams());
        assert_eq!(projected.len(), 18);
        for s in &projected {
            for (i, pos) in s.positions.iter().enumerate() {
                let pos = pos.unwrap_or_else(|| panic!("{}[{i}] unresolved", s.id));
                assert!(
                    pos.team_id.is_some() || pos.is_bye,
                    "{}[{i}] has neither team nor bye",
                    s.id
                );
            }
        }
    }

    #[test]
    fn chalk_projection_routes_favorites_through_the_champ_bracket() {
        // Averages: seed1 120, seed2 115, seed3 110, seed4 105, seed5 100, …
        let projected = project_bracket(&twelve_teams());

        // Quarterfinal 1: seed 4 over seed 5, into the semifinal's open side.
        assert_eq!(team_at(&projected, SlotId::ChampR2G1, 1), Some(4));
        // Semifinal 1: seed 1 over seed 4, into the finals' top side.
        assert_eq!(team_at(&projected, SlotId::ChampFinals, 0), Some(1));
        // Finals: seed 1 over seed 2 — both present.
        assert_eq!(team_at(&projected, SlotId::ChampFinals, 1), Some(2));
        // Semifinal losers meet for 3rd.
        assert_eq!(team_at(&projected, SlotId::ChampThird, 0), Some(4));
        assert_eq!(team_at(&projected, SlotId::ChampThird, 1), Some(3));
    }

    #[test]
    fn chalk_projection_sinks_the_worst_seeds_in_the_toilet() {
        let projected = project_bracket(&twelve_teams());
        // Toilet QF1: seed 8 (avg 85) beats seed 9 (avg 80); winner meets
        // seed 12 in the toilet semi and outscores them too.
        assert_eq!(team_at(&projected, SlotId::ToiletR2G1, 1), Some(8));
        assert_eq!(team_at(&projected, SlotId::ToiletFinals, 0), Some(8));
        // Round-1 losers fall into the keeper floaters.
        assert_eq!(team_at(&projected, SlotId::KeeperFloater1, 1), Some(9));
        assert_eq!(team_at(&projected, SlotId::KeeperFloater2, 1), Some(10));
    }

    #[test]
    fn chalk_projection_resolves_the_keeper_placements() {
        let projected = project_bracket(&twelve_teams());
        // Floater 1: seed 5 (avg 100) vs seed 9 (avg 80) — 5 advances through
        // the splashback bye into the 5th place game, 9 falls to 7th/8th.
        assert_eq!(team_at(&projected, SlotId::KeeperSplashback1, 0), Some(5));
        assert_eq!(team_at(&projected, SlotId::KeeperFifthSixth, 0), Some(5));
        assert_eq!(team_at(&projected, SlotId::KeeperFifthSixth, 1), Some(6));
        assert_eq!(team_at(&projected, SlotId::KeeperSeventhEighth, 0), Some(9));
        assert_eq!(team_at(&projected, SlotId::KeeperSeventhEighth, 1), Some(10));
    }

    #[test]
    fn projected_scores_are_stamped_on_resolved_positions() {
        let projected = project_bracket(&twelve_teams());
        let finals_top = slot(&projected, SlotId::ChampFinals).positions[0].unwrap();
        assert_eq!(finals_top.projected_points, Some(120.0));
        assert_eq!(finals_top.current_points, Some(120.0));
    }

    #[test]
    fn byes_stay_scoreless_through_projection() {
        let projected = project_bracket(&twelve_teams());
        for id in [SlotId::KeeperSplashback1, SlotId::KeeperSplashback2] {
            let bye = slot(&projected, id).positions[1].unwrap();
            assert!(bye.is_bye);
            assert!(bye.current_points.is_none());
            assert!(bye.projected_points.is_none());
        }
    }

    #[test]
    fn unseeded_input_terminates_with_the_bracket_unresolved() {
        let teams: Vec<Team> = (1..=12)
            .map(|id| Team {
                team_id: id,
                seed: None,
                season_points_for: 1000.0,
                games_played: 10,
            })
            .collect();
        let projected = project_bracket(&teams);
        // No seeds, so nothing is concrete and nothing resolves — but the
        // loop still terminates cleanly.
        assert_eq!(projected.len(), 18);
        assert!(team_at(&projected, SlotId::ChampFinals, 0).is_none());
    }
}
