//! Three-division fantasy football playoff engine.
//!
//! A fixed 18-game template across three interlocking brackets — the
//! championship bracket (seeds 1–6), the toilet bowl (seeds 7–12), and the
//! keeper bracket the round-1 losers fall into — plus the declarative
//! routing rules that carry winners and losers between them.
//!
//! The engine is pure and synchronous: seeding, outcome application, and
//! projection are all deterministic functions from slot arrays to new slot
//! arrays. League I/O lives in the `sleeper-api` workspace member and is
//! stitched in by [`live::live_bracket`].

pub mod bracket;
pub mod live;
pub mod standings;

pub use bracket::outcomes::{slot_for_provider_match, to_bracket_game_outcomes};
pub use bracket::projection::{pick_winner, project_bracket};
pub use bracket::routing::apply_outcomes;
pub use bracket::rules::{resolution_order, rule_for, ROUTING_RULES, RoutingRule, Target};
pub use bracket::seeding::assign_seeds;
pub use bracket::template::{template_slot, TEMPLATE};
pub use bracket::{BracketId, GameOutcome, Round, Slot, SlotId, Team, TeamRef};
pub use standings::playoff_seeds;

#[cfg(test)]
mod tests {
    use super::*;

    fn league_of_averages(averages: [f64; 12]) -> Vec<Team> {
        averages
            .iter()
            .enumerate()
            .map(|(i, avg)| Team {
                team_id: (i + 1) as u64,
                seed: Some((i + 1) as u8),
                season_points_for: avg * 14.0,
                games_played: 14,
            })
            .collect()
    }

    /// Season-end scenario: seed 1 averaging 120 down to seed 12 at 50.
    #[test]
    fn season_ended_today_projection_end_to_end() {
        let teams = league_of_averages([
            120.0, 115.0, 110.0, 90.0, 85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0, 50.0,
        ]);
        let projected = project_bracket(&teams);

        let team_at = |id: SlotId, position: usize| {
            projected
                .iter()
                .find(|s| s.id == id)
                .and_then(|s| s.positions[position])
                .and_then(|p| p.team_id)
        };

        // Quarterfinal: seed 4 (90) over seed 5 (85), routed into the
        // semifinal's bottom side.
        assert_eq!(team_at(SlotId::ChampR2G1, 1), Some(4));
        // Semifinal: seed 1 (120) over seed 4 (90), into the finals' top.
        assert_eq!(team_at(SlotId::ChampFinals, 0), Some(1));
        assert_eq!(team_at(SlotId::ChampFinals, 1), Some(2));
    }

    #[test]
    fn slots_serialize_for_the_rendering_layer() {
        let json = serde_json::to_value(&TEMPLATE[0]).unwrap();
        assert_eq!(json["id"], "champ_r1_g1");
        assert_eq!(json["bracket"], "champ");
        assert_eq!(json["round"], "champ_round_1");
        assert_eq!(json["positions"][0]["seed"], 4);
        assert_eq!(json["positions"][0]["teamId"], serde_json::Value::Null);
    }

    #[test]
    fn renderer_hints_expose_where_winners_go() {
        let rule = rule_for(SlotId::ChampR1G1).expect("quarterfinals route");
        let target = rule.winner_to.unwrap();
        assert_eq!(target.slot, SlotId::ChampR2G1);
        assert_eq!(target.position, 1);
    }
}
