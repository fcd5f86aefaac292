use crate::bracket::{BracketId, Round, Slot, SlotId, TeamRef};

// ---------------------------------------------------------------------------
// Canonical bracket template — authoritative ground truth for topology
// ---------------------------------------------------------------------------

const fn seeded(seed: u8) -> Option<TeamRef> {
    Some(TeamRef::from_seed(seed))
}

const fn bye() -> Option<TeamRef> {
    Some(TeamRef::bye())
}

/// The 18 slots of the three-division playoff, in `SlotId::ALL` order.
///
/// Champ bracket: seeds 1–6, with 1 and 2 resting through round 1.
/// Toilet bowl: seeds 7–12, mirrored, with 11 and 12 waiting in round 2.
/// Keeper bracket: no seeds of its own — round-1 losers from both sides fall
/// into the floaters; floater winners get a splashback bye week before the
/// 5th place game. Positions fed purely by routing start as `None`.
///
/// `const` makes the read-only contract structural: consumers clone, the
/// template itself cannot be written through.
pub const TEMPLATE: [Slot; SlotId::COUNT] = [
    Slot {
        id: SlotId::ChampR1G1,
        bracket: BracketId::Champ,
        round: Round::ChampRound1,
        label: "Quarterfinal 1",
        positions: [seeded(4), seeded(5)],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ChampR1G2,
        bracket: BracketId::Champ,
        round: Round::ChampRound1,
        label: "Quarterfinal 2",
        positions: [seeded(3), seeded(6)],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ChampR2G1,
        bracket: BracketId::Champ,
        round: Round::ChampRound2,
        label: "Semifinal 1",
        positions: [seeded(1), None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ChampR2G2,
        bracket: BracketId::Champ,
        round: Round::ChampRound2,
        label: "Semifinal 2",
        positions: [seeded(2), None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ChampFinals,
        bracket: BracketId::Champ,
        round: Round::ChampFinals,
        label: "Championship",
        positions: [None, None],
        reward_title: Some("League Champion"),
        reward_text: Some("Takes the pot, the trophy, and a year of gloating."),
    },
    Slot {
        id: SlotId::ChampThird,
        bracket: BracketId::Champ,
        round: Round::ChampMisc,
        label: "3rd Place Game",
        positions: [None, None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ToiletR1G1,
        bracket: BracketId::Toilet,
        round: Round::ToiletRound1,
        label: "Toilet Quarterfinal 1",
        positions: [seeded(8), seeded(9)],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ToiletR1G2,
        bracket: BracketId::Toilet,
        round: Round::ToiletRound1,
        label: "Toilet Quarterfinal 2",
        positions: [seeded(7), seeded(10)],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ToiletR2G1,
        bracket: BracketId::Toilet,
        round: Round::ToiletRound2,
        label: "Toilet Semifinal 1",
        positions: [seeded(12), None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ToiletR2G2,
        bracket: BracketId::Toilet,
        round: Round::ToiletRound2,
        label: "Toilet Semifinal 2",
        positions: [seeded(11), None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::ToiletFinals,
        bracket: BracketId::Toilet,
        round: Round::ToiletFinals,
        label: "Poop Bowl",
        positions: [None, None],
        reward_title: Some("Poop King"),
        reward_text: Some("Wears the porcelain crown until next season."),
    },
    Slot {
        id: SlotId::ToiletNinthTenth,
        bracket: BracketId::Toilet,
        round: Round::ToiletMisc,
        label: "9th Place Game",
        positions: [None, None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::KeeperFloater1,
        bracket: BracketId::Keeper,
        round: Round::KeeperRound1,
        label: "Floater 1",
        positions: [None, None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::KeeperFloater2,
        bracket: BracketId::Keeper,
        round: Round::KeeperRound1,
        label: "Floater 2",
        positions: [None, None],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::KeeperSplashback1,
        bracket: BracketId::Keeper,
        round: Round::KeeperRound1,
        label: "Splashback 1",
        positions: [None, bye()],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::KeeperSplashback2,
        bracket: BracketId::Keeper,
        round: Round::KeeperRound1,
        label: "Splashback 2",
        positions: [None, bye()],
        reward_title: None,
        reward_text: None,
    },
    Slot {
        id: SlotId::KeeperFifthSixth,
        bracket: BracketId::Keeper,
        round: Round::KeeperMisc,
        label: "5th Place Game",
        positions: [None, None],
        reward_title: Some("Keeper Priority"),
        reward_text: Some("Picks keepers first at next year's draft."),
    },
    Slot {
        id: SlotId::KeeperSeventhEighth,
        bracket: BracketId::Keeper,
        round: Round::KeeperMisc,
        label: "7th Place Game",
        positions: [None, None],
        reward_title: None,
        reward_text: None,
    },
];

/// Slot lookup in the canonical template.
pub fn template_slot(id: SlotId) -> &'static Slot {
    &TEMPLATE[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_exactly_18_slots_in_id_order() {
        assert_eq!(TEMPLATE.len(), 18);
        for (i, slot) in TEMPLATE.iter().enumerate() {
            assert_eq!(slot.id as usize, i, "{} misplaced", slot.id);
            assert_eq!(template_slot(slot.id).id, slot.id);
        }
    }

    #[test]
    fn champ_round_1_pairs_4v5_and_3v6() {
        let g1 = template_slot(SlotId::ChampR1G1);
        assert_eq!(g1.positions[0].unwrap().seed, Some(4));
        assert_eq!(g1.positions[1].unwrap().seed, Some(5));
        let g2 = template_slot(SlotId::ChampR1G2);
        assert_eq!(g2.positions[0].unwrap().seed, Some(3));
        assert_eq!(g2.positions[1].unwrap().seed, Some(6));
    }

    #[test]
    fn top_two_seeds_rest_into_round_2() {
        assert_eq!(
            template_slot(SlotId::ChampR2G1).positions[0].unwrap().seed,
            Some(1)
        );
        assert_eq!(
            template_slot(SlotId::ChampR2G2).positions[0].unwrap().seed,
            Some(2)
        );
        assert!(template_slot(SlotId::ChampR2G1).positions[1].is_none());
    }

    #[test]
    fn toilet_mirrors_champ_for_the_bottom_of_the_standings() {
        let g1 = template_slot(SlotId::ToiletR1G1);
        assert_eq!(g1.positions[0].unwrap().seed, Some(8));
        assert_eq!(g1.positions[1].unwrap().seed, Some(9));
        let g2 = template_slot(SlotId::ToiletR1G2);
        assert_eq!(g2.positions[0].unwrap().seed, Some(7));
        assert_eq!(g2.positions[1].unwrap().seed, Some(10));
        assert_eq!(
            template_slot(SlotId::ToiletR2G1).positions[0].unwrap().seed,
            Some(12)
        );
        assert_eq!(
            template_slot(SlotId::ToiletR2G2).positions[0].unwrap().seed,
            Some(11)
        );
    }

    #[test]
    fn seeds_1_through_12_each_appear_exactly_once() {
        let mut counts = [0u8; 13];
        for slot in &TEMPLATE {
            for pos in slot.positions.iter().flatten() {
                if let Some(seed) = pos.seed {
                    counts[seed as usize] += 1;
                }
            }
        }
        for seed in 1..=12 {
            assert_eq!(counts[seed], 1, "seed {seed} appears {} times", counts[seed]);
        }
    }

    #[test]
    fn splashbacks_carry_a_structural_bye() {
        for id in [SlotId::KeeperSplashback1, SlotId::KeeperSplashback2] {
            let slot = template_slot(id);
            let bye = slot.positions[1].expect("splashback bye present");
            assert!(bye.is_bye);
            assert!(bye.team_id.is_none());
            assert!(bye.current_points.is_none(), "byes never carry points");
        }
    }

    #[test]
    fn rewards_sit_only_on_terminal_slots() {
        for slot in &TEMPLATE {
            if slot.reward_title.is_some() {
                assert!(
                    crate::bracket::rules::rule_for(slot.id).is_none(),
                    "{} has a reward but routes onward",
                    slot.id
                );
            }
        }
    }
}
