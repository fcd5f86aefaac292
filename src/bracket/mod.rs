pub mod outcomes;
pub mod projection;
pub mod routing;
pub mod rules;
pub mod seeding;
pub mod template;

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Core types — the fixed vocabulary of the three-division playoff bracket
// ---------------------------------------------------------------------------

/// The three independent sub-tournaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketId {
    Champ,
    Keeper,
    Toilet,
}

impl BracketId {
    pub fn label(&self) -> &'static str {
        match self {
            BracketId::Champ => "Championship Bracket",
            BracketId::Keeper => "Keeper Bracket",
            BracketId::Toilet => "Toilet Bowl",
        }
    }
}

/// The 18 fixed game identifiers. Discriminant order matches the template
/// array order, so `id as usize` indexes both.
///
/// An enum (rather than string ids) makes "rule targets a nonexistent slot"
/// unrepresentable; the wire names below are what the rendering layer sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotId {
    #[serde(rename = "champ_r1_g1")]
    ChampR1G1,
    #[serde(rename = "champ_r1_g2")]
    ChampR1G2,
    #[serde(rename = "champ_r2_g1")]
    ChampR2G1,
    #[serde(rename = "champ_r2_g2")]
    ChampR2G2,
    #[serde(rename = "champ_finals")]
    ChampFinals,
    #[serde(rename = "champ_3rd")]
    ChampThird,
    #[serde(rename = "toilet_r1_g1")]
    ToiletR1G1,
    #[serde(rename = "toilet_r1_g2")]
    ToiletR1G2,
    #[serde(rename = "toilet_r2_g1")]
    ToiletR2G1,
    #[serde(rename = "toilet_r2_g2")]
    ToiletR2G2,
    #[serde(rename = "toilet_finals")]
    ToiletFinals,
    #[serde(rename = "toilet_9th_10th")]
    ToiletNinthTenth,
    #[serde(rename = "keeper_floater1")]
    KeeperFloater1,
    #[serde(rename = "keeper_floater2")]
    KeeperFloater2,
    #[serde(rename = "keeper_splashback1")]
    KeeperSplashback1,
    #[serde(rename = "keeper_splashback2")]
    KeeperSplashback2,
    #[serde(rename = "keeper_5th_6th")]
    KeeperFifthSixth,
    #[serde(rename = "keeper_7th_8th")]
    KeeperSeventhEighth,
}

impl SlotId {
    pub const COUNT: usize = 18;

    /// All slot ids in template order.
    pub const ALL: [SlotId; SlotId::COUNT] = [
        SlotId::ChampR1G1,
        SlotId::ChampR1G2,
        SlotId::ChampR2G1,
        SlotId::ChampR2G2,
        SlotId::ChampFinals,
        SlotId::ChampThird,
        SlotId::ToiletR1G1,
        SlotId::ToiletR1G2,
        SlotId::ToiletR2G1,
        SlotId::ToiletR2G2,
        SlotId::ToiletFinals,
        SlotId::ToiletNinthTenth,
        SlotId::KeeperFloater1,
        SlotId::KeeperFloater2,
        SlotId::KeeperSplashback1,
        SlotId::KeeperSplashback2,
        SlotId::KeeperFifthSixth,
        SlotId::KeeperSeventhEighth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotId::ChampR1G1 => "champ_r1_g1",
            SlotId::ChampR1G2 => "champ_r1_g2",
            SlotId::ChampR2G1 => "champ_r2_g1",
            SlotId::ChampR2G2 => "champ_r2_g2",
            SlotId::ChampFinals => "champ_finals",
            SlotId::ChampThird => "champ_3rd",
            SlotId::ToiletR1G1 => "toilet_r1_g1",
            SlotId::ToiletR1G2 => "toilet_r1_g2",
            SlotId::ToiletR2G1 => "toilet_r2_g1",
            SlotId::ToiletR2G2 => "toilet_r2_g2",
            SlotId::ToiletFinals => "toilet_finals",
            SlotId::ToiletNinthTenth => "toilet_9th_10th",
            SlotId::KeeperFloater1 => "keeper_floater1",
            SlotId::KeeperFloater2 => "keeper_floater2",
            SlotId::KeeperSplashback1 => "keeper_splashback1",
            SlotId::KeeperSplashback2 => "keeper_splashback2",
            SlotId::KeeperFifthSixth => "keeper_5th_6th",
            SlotId::KeeperSeventhEighth => "keeper_7th_8th",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-grouping tag for a slot's round. Carries no transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Round {
    #[serde(rename = "champ_round_1")]
    ChampRound1,
    #[serde(rename = "champ_round_2")]
    ChampRound2,
    #[serde(rename = "champ_finals")]
    ChampFinals,
    #[serde(rename = "champ_misc")]
    ChampMisc,
    #[serde(rename = "toilet_round_1")]
    ToiletRound1,
    #[serde(rename = "toilet_round_2")]
    ToiletRound2,
    #[serde(rename = "toilet_finals")]
    ToiletFinals,
    #[serde(rename = "toilet_misc")]
    ToiletMisc,
    #[serde(rename = "keeper_round_1")]
    KeeperRound1,
    #[serde(rename = "keeper_misc")]
    KeeperMisc,
}

impl Round {
    pub fn label(&self) -> &'static str {
        match self {
            Round::ChampRound1 => "Round 1",
            Round::ChampRound2 => "Semifinals",
            Round::ChampFinals => "Championship",
            Round::ChampMisc => "3rd Place",
            Round::ToiletRound1 => "Toilet Round 1",
            Round::ToiletRound2 => "Toilet Round 2",
            Round::ToiletFinals => "Poop Bowl",
            Round::ToiletMisc => "9th Place",
            Round::KeeperRound1 => "Keeper Games",
            Round::KeeperMisc => "Keeper Placement",
        }
    }
}

/// One side of a game: a seed placeholder at template time, a concrete team
/// after seeding, and a scored team once live or projected points land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub seed: Option<u8>,
    pub team_id: Option<u64>,
    pub is_bye: bool,
    pub current_points: Option<f64>,
    pub projected_points: Option<f64>,
}

impl TeamRef {
    pub const fn from_seed(seed: u8) -> Self {
        TeamRef {
            seed: Some(seed),
            team_id: None,
            is_bye: false,
            current_points: None,
            projected_points: None,
        }
    }

    /// Structural bye: occupies a position but never scores or travels.
    pub const fn bye() -> Self {
        TeamRef {
            seed: None,
            team_id: None,
            is_bye: true,
            current_points: None,
            projected_points: None,
        }
    }

    /// Field-level overlay: keep `base`'s fields except where `self` has a
    /// populated value. Routing writes through this so metadata already
    /// sitting at a destination (e.g. a stamped score) survives the move.
    pub fn merged_over(self, base: Option<TeamRef>) -> TeamRef {
        let base = base.unwrap_or_default();
        TeamRef {
            seed: self.seed.or(base.seed),
            team_id: self.team_id.or(base.team_id),
            is_bye: self.is_bye,
            current_points: self.current_points.or(base.current_points),
            projected_points: self.projected_points.or(base.projected_points),
        }
    }
}

/// One scheduled game. Identity and topology are fixed at template time;
/// only the two position contents ever change (on copies, never in place).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: SlotId,
    pub bracket: BracketId,
    pub round: Round,
    pub label: &'static str,
    /// Index 0 = top/left, index 1 = bottom/right. The fixed-size array is
    /// the "exactly two positions" invariant.
    pub positions: [Option<TeamRef>; 2],
    pub reward_title: Option<&'static str>,
    pub reward_text: Option<&'static str>,
}

/// Engine-side view of a team: just enough for seeding and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    pub team_id: u64,
    /// 1..=12 playoff seed, unique when present.
    pub seed: Option<u8>,
    pub season_points_for: f64,
    pub games_played: u32,
}

impl Team {
    /// Season scoring average, the projection heuristic's input.
    pub fn projected_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.season_points_for / self.games_played as f64
        }
    }
}

/// The sole externally supplied fact needed to advance the bracket one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub slot: SlotId,
    /// 0 or 1; the loser index is always the complement.
    pub winner_index: usize,
}

impl GameOutcome {
    pub fn loser_index(&self) -> usize {
        1 - self.winner_index
    }
}
