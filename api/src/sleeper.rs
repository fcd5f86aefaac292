/// Sleeper API raw wire types — serde shapes for deserializing Sleeper responses.
/// These map to our clean domain types via the functions in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// League  (/v1/league/{id})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperLeague {
    pub league_id: Option<String>,
    pub name: Option<String>,
    /// Sleeper sends the season as a string, e.g. "2025".
    pub season: Option<String>,
    pub total_rosters: Option<u8>,
    pub settings: Option<SleeperLeagueSettings>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperLeagueSettings {
    pub playoff_week_start: Option<u8>,
}

// ---------------------------------------------------------------------------
// Users  (/v1/league/{id}/users)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperUser {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub metadata: Option<SleeperUserMetadata>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperUserMetadata {
    pub team_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Rosters  (/v1/league/{id}/rosters)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperRoster {
    pub roster_id: Option<u64>,
    pub owner_id: Option<String>,
    pub settings: Option<SleeperRosterSettings>,
}

/// Sleeper splits fractional points into an integer part and a hundredths
/// part (`fpts` + `fpts_decimal`), presumably to dodge float drift.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperRosterSettings {
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub ties: Option<u32>,
    pub fpts: Option<i64>,
    pub fpts_decimal: Option<u32>,
    pub fpts_against: Option<i64>,
    pub fpts_against_decimal: Option<u32>,
}

impl SleeperRosterSettings {
    pub fn points_for(&self) -> f64 {
        combine_points(self.fpts, self.fpts_decimal)
    }

    pub fn points_against(&self) -> f64 {
        combine_points(self.fpts_against, self.fpts_against_decimal)
    }
}

fn combine_points(whole: Option<i64>, hundredths: Option<u32>) -> f64 {
    whole.unwrap_or(0) as f64 + hundredths.unwrap_or(0) as f64 / 100.0
}

// ---------------------------------------------------------------------------
// Weekly matchups  (/v1/league/{id}/matchups/{week})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperMatchup {
    pub roster_id: Option<u64>,
    pub matchup_id: Option<u64>,
    pub points: Option<f64>,
}

// ---------------------------------------------------------------------------
// Playoff brackets  (/v1/league/{id}/winners_bracket, …/losers_bracket)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SleeperBracketMatch {
    /// Round within the bracket, 1-based.
    pub r: Option<u8>,
    /// Match id, unique within the bracket and referenced by later rounds.
    pub m: Option<u64>,
    pub t1: Option<SleeperBracketTeam>,
    pub t2: Option<SleeperBracketTeam>,
    /// Winner / loser roster ids, present once the match is decided.
    pub w: Option<u64>,
    pub l: Option<u64>,
    /// Placement the match decides (1 = championship, 3 = third place, …).
    pub p: Option<u8>,
}

/// A bracket team slot is either a concrete roster id, or a reference to a
/// prior match whose winner (`{"w": m}`) or loser (`{"l": m}`) fills it.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum SleeperBracketTeam {
    Roster(u64),
    From(SleeperBracketRef),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SleeperBracketRef {
    pub w: Option<u64>,
    pub l: Option<u64>,
}
