use crate::bracket::{GameOutcome, Slot, SlotId};
use log::warn;
use sleeper_api::{BracketMatch, BracketSide};

// ---------------------------------------------------------------------------
// Provider bracket records → engine outcomes
// ---------------------------------------------------------------------------

/// Static lookup from a provider bracket key `(side, round, match id)` to the
/// engine slot it decides. The champ bracket is the provider's winners
/// bracket, the toilet bowl its losers bracket; keeper games are synthesized
/// by the engine and never appear in provider data.
pub const PROVIDER_SLOT_MAP: [((BracketSide, u8, u64), SlotId); 12] = [
    ((BracketSide::Winners, 1, 1), SlotId::ChampR1G1),
    ((BracketSide::Winners, 1, 2), SlotId::ChampR1G2),
    ((BracketSide::Winners, 2, 3), SlotId::ChampR2G1),
    ((BracketSide::Winners, 2, 4), SlotId::ChampR2G2),
    ((BracketSide::Winners, 3, 5), SlotId::ChampFinals),
    ((BracketSide::Winners, 3, 6), SlotId::ChampThird),
    ((BracketSide::Losers, 1, 1), SlotId::ToiletR1G1),
    ((BracketSide::Losers, 1, 2), SlotId::ToiletR1G2),
    ((BracketSide::Losers, 2, 3), SlotId::ToiletR2G1),
    ((BracketSide::Losers, 2, 4), SlotId::ToiletR2G2),
    ((BracketSide::Losers, 3, 5), SlotId::ToiletFinals),
    ((BracketSide::Losers, 3, 6), SlotId::ToiletNinthTenth),
];

pub fn slot_for_provider_match(side: BracketSide, round: u8, match_id: u64) -> Option<SlotId> {
    PROVIDER_SLOT_MAP
        .iter()
        .find(|(key, _)| *key == (side, round, match_id))
        .map(|(_, slot)| *slot)
}

/// Map decided provider matches onto engine outcomes against the current
/// bracket state. Tolerant by design: undecided matches are ignored, and a
/// match with no mapped slot — or whose winner hasn't been routed into the
/// slot yet — is logged and skipped without aborting the rest of the batch.
pub fn to_bracket_game_outcomes(slots: &[Slot], matches: &[BracketMatch]) -> Vec<GameOutcome> {
    matches
        .iter()
        .filter_map(|m| {
            let winner = m.winner?;
            let Some(slot_id) = slot_for_provider_match(m.side, m.round, m.match_id) else {
                warn!(
                    "no bracket slot mapped for provider match {:?} r{} m{}; skipping",
                    m.side, m.round, m.match_id
                );
                return None;
            };
            let slot = slots.iter().find(|s| s.id == slot_id)?;
            let winner_index = slot
                .positions
                .iter()
                .position(|p| p.and_then(|t| t.team_id) == Some(winner));
            match winner_index {
                Some(winner_index) => Some(GameOutcome {
                    slot: slot_id,
                    winner_index,
                }),
                None => {
                    warn!("winner roster {winner} not yet present in {slot_id}; skipping");
                    None
                }
            }
        })
        .collect()
}
