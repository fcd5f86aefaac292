use crate::bracket::SlotId;

// ---------------------------------------------------------------------------
// Routing rules — directed edges of the bracket state machine
// ---------------------------------------------------------------------------

/// Destination of a routed winner or loser: a slot and one of its two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub slot: SlotId,
    /// 0 = top/left, 1 = bottom/right.
    pub position: usize,
}

const fn to(slot: SlotId, position: usize) -> Option<Target> {
    Some(Target { slot, position })
}

/// Where a slot's winner and loser are placed next. Terminal slots (finals
/// and placement games) have no rule at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingRule {
    pub from: SlotId,
    pub winner_to: Option<Target>,
    pub loser_to: Option<Target>,
}

/// One rule per non-terminal slot. Champ and toilet round-1 losers fall into
/// the keeper floaters; floater winners earn a splashback bye game on the way
/// to 5th place.
///
/// `keeper_7th_8th` deliberately receives two sources per position index
/// (floater loser, then splashback loser). Within a single `apply_outcomes`
/// call the later outcome in iteration order wins that position; callers who
/// need the floater result preserved must apply the splashback round in a
/// separate call.
pub const ROUTING_RULES: [RoutingRule; 12] = [
    RoutingRule {
        from: SlotId::ChampR1G1,
        winner_to: to(SlotId::ChampR2G1, 1),
        loser_to: to(SlotId::KeeperFloater1, 0),
    },
    RoutingRule {
        from: SlotId::ChampR1G2,
        winner_to: to(SlotId::ChampR2G2, 1),
        loser_to: to(SlotId::KeeperFloater2, 0),
    },
    RoutingRule {
        from: SlotId::ChampR2G1,
        winner_to: to(SlotId::ChampFinals, 0),
        loser_to: to(SlotId::ChampThird, 0),
    },
    RoutingRule {
        from: SlotId::ChampR2G2,
        winner_to: to(SlotId::ChampFinals, 1),
        loser_to: to(SlotId::ChampThird, 1),
    },
    RoutingRule {
        from: SlotId::ToiletR1G1,
        winner_to: to(SlotId::ToiletR2G1, 1),
        loser_to: to(SlotId::KeeperFloater1, 1),
    },
    RoutingRule {
        from: SlotId::ToiletR1G2,
        winner_to: to(SlotId::ToiletR2G2, 1),
        loser_to: to(SlotId::KeeperFloater2, 1),
    },
    RoutingRule {
        from: SlotId::ToiletR2G1,
        winner_to: to(SlotId::ToiletFinals, 0),
        loser_to: to(SlotId::ToiletNinthTenth, 0),
    },
    RoutingRule {
        from: SlotId::ToiletR2G2,
        winner_to: to(SlotId::ToiletFinals, 1),
        loser_to: to(SlotId::ToiletNinthTenth, 1),
    },
    RoutingRule {
        from: SlotId::KeeperFloater1,
        winner_to: to(SlotId::KeeperSplashback1, 0),
        loser_to: to(SlotId::KeeperSeventhEighth, 0),
    },
    RoutingRule {
        from: SlotId::KeeperFloater2,
        winner_to: to(SlotId::KeeperSplashback2, 0),
        loser_to: to(SlotId::KeeperSeventhEighth, 1),
    },
    RoutingRule {
        from: SlotId::KeeperSplashback1,
        winner_to: to(SlotId::KeeperFifthSixth, 0),
        loser_to: to(SlotId::KeeperSeventhEighth, 0),
    },
    RoutingRule {
        from: SlotId::KeeperSplashback2,
        winner_to: to(SlotId::KeeperFifthSixth, 1),
        loser_to: to(SlotId::KeeperSeventhEighth, 1),
    },
];

/// Rule lookup for a slot. `None` means terminal: the result stays put.
/// Also the renderer's read-only source for "winner goes to X" hints.
pub fn rule_for(id: SlotId) -> Option<&'static RoutingRule> {
    ROUTING_RULES.iter().find(|r| r.from == id)
}

/// Topological resolution order over the routing graph, computed with Kahn's
/// algorithm at call time instead of hand-maintaining an order list. Ties
/// break in template order, so the result is deterministic and covers all
/// 18 slots (the graph is a finite DAG by construction).
pub fn resolution_order() -> Vec<SlotId> {
    let mut indegree = [0usize; SlotId::COUNT];
    for rule in &ROUTING_RULES {
        for target in [rule.winner_to, rule.loser_to].into_iter().flatten() {
            indegree[target.slot as usize] += 1;
        }
    }

    let mut order = Vec::with_capacity(SlotId::COUNT);
    let mut placed = [false; SlotId::COUNT];
    while order.len() < SlotId::COUNT {
        let mut advanced = false;
        for id in SlotId::ALL {
            let i = id as usize;
            if placed[i] || indegree[i] > 0 {
                continue;
            }
            placed[i] = true;
            order.push(id);
            advanced = true;
            if let Some(rule) = rule_for(id) {
                for target in [rule.winner_to, rule.loser_to].into_iter().flatten() {
                    indegree[target.slot as usize] -= 1;
                }
            }
        }
        if !advanced {
            // A cycle would be a defect in ROUTING_RULES itself; callers get
            // the acyclic prefix and the unreachable slots stay unresolved.
            break;
        }
    }
    order
}
