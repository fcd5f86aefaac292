use crate::bracket::rules::{Target, rule_for};
use crate::bracket::{GameOutcome, Slot, TeamRef};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Outcome application — the bracket's state-transition function
// ---------------------------------------------------------------------------

/// Apply already-decided game outcomes to a bracket state, copying winners
/// and losers into their routed destinations. Pure: returns a new slot array,
/// the input is untouched.
///
/// Sources are read from the input snapshot and writes land in the clone, so
/// one call propagates exactly one synchronous round of results — an outcome
/// never sees another outcome's routed team, only its destination writes
/// (which overlay field-by-field, later outcomes winning shared positions).
///
/// Tolerances, by design: an outcome naming a slot absent from `slots` is
/// skipped; a slot with no routing rule is terminal and propagates nothing.
pub fn apply_outcomes(slots: &[Slot], outcomes: &[GameOutcome]) -> Vec<Slot> {
    let mut next: Vec<Slot> = slots.to_vec();
    let index_of: HashMap<_, _> = slots
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    for outcome in outcomes {
        let Some(&from) = index_of.get(&outcome.slot) else {
            continue;
        };
        let Some(rule) = rule_for(outcome.slot) else {
            continue;
        };
        if outcome.winner_index > 1 {
            continue;
        }

        let winner = slots[from].positions[outcome.winner_index];
        let loser = slots[from].positions[outcome.loser_index()];

        route(&mut next, &index_of, rule.winner_to, winner);
        route(&mut next, &index_of, rule.loser_to, loser);
    }

    next
}

/// Write one routed team into its destination position. Only concrete teams
/// travel: empty positions and byes stay where they are.
fn route(
    next: &mut [Slot],
    index_of: &HashMap<crate::bracket::SlotId, usize>,
    target: Option<Target>,
    source: Option<TeamRef>,
) {
    let Some(target) = target else { return };
    let Some(source) = source else { return };
    if source.team_id.is_none() {
        return;
    }
    let Some(&dest) = index_of.get(&target.slot) else {
        return;
    };
    let position = &mut next[dest].positions[target.position];
    *position = Some(source.merged_over(*position));
}
