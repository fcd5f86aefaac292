pub mod client;
pub mod sleeper;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the Sleeper wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct League {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub total_rosters: u8,
    /// First NFL week of the league's playoff schedule, when configured.
    pub playoff_week_start: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct LeagueUser {
    pub user_id: String,
    pub display_name: String,
    pub team_name: Option<String>, // custom name from user metadata, if set
    pub avatar: Option<String>,
}

/// One franchise's season record and scoring totals.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub roster_id: u64,
    pub owner_id: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

impl Roster {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// One side of a weekly head-to-head matchup. Two `Matchup` entries share a
/// `matchup_id` within a week; median/bye formats may leave it unset.
#[derive(Debug, Clone, Default)]
pub struct Matchup {
    pub roster_id: u64,
    pub matchup_id: Option<u64>,
    pub points: f64,
}

/// Which of the two provider playoff brackets a match belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketSide {
    Winners,
    Losers,
}

/// One occupant of a playoff bracket match, which may not be a concrete
/// roster yet: early rounds reference the winner/loser of a prior match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketTeam {
    #[default]
    Tbd,
    Roster(u64),
    WinnerOf(u64),
    LoserOf(u64),
}

impl BracketTeam {
    pub fn roster_id(&self) -> Option<u64> {
        match self {
            BracketTeam::Roster(id) => Some(*id),
            _ => None,
        }
    }
}

/// One game in a provider playoff bracket (winners or losers side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    pub side: BracketSide,
    pub round: u8,
    pub match_id: u64,
    pub team1: BracketTeam,
    pub team2: BracketTeam,
    /// Winning roster id, once the provider has recorded a result.
    pub winner: Option<u64>,
    pub loser: Option<u64>,
    /// Final placement this match decides (1 = title game, 3 = third place, …).
    pub placement: Option<u8>,
}

impl BracketMatch {
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}
