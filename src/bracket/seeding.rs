use crate::bracket::{Slot, Team};
use std::collections::HashMap;

/// Bind concrete team ids to every template position that carries a seed.
///
/// Returns a wholly new slot array; the input template is never written
/// through. Positions without a seed, or whose seed has no matching team,
/// pass through unchanged — an unseeded league degrades to a structural copy
/// of the template.
pub fn assign_seeds(teams: &[Team], template: &[Slot]) -> Vec<Slot> {
    let by_seed: HashMap<u8, u64> = teams
        .iter()
        .filter_map(|t| t.seed.map(|s| (s, t.team_id)))
        .collect();

    template
        .iter()
        .map(|slot| {
            let mut slot = slot.clone();
            for pos in slot.positions.iter_mut().flatten() {
                if let Some(seed) = pos.seed
                    && let Some(&team_id) = by_seed.get(&seed)
                {
                    pos.team_id = Some(team_id);
                }
            }
            slot
        })
        .collect()
}
