use crate::sleeper::{
    SleeperBracketMatch, SleeperBracketTeam, SleeperLeague, SleeperMatchup, SleeperRoster,
    SleeperUser,
};
use crate::{BracketMatch, BracketSide, BracketTeam, League, LeagueUser, Matchup, Roster};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const SLEEPER_V1: &str = "https://api.sleeper.app/v1";

/// League data client backed by Sleeper's public read-only endpoints.
#[derive(Debug, Clone)]
pub struct SleeperApi {
    client: Client,
    timeout: Duration,
}

impl Default for SleeperApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("ff-playoffs/0.2 (playoff bracket engine)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl SleeperApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch league metadata (name, season, roster count, playoff start week).
    pub async fn fetch_league(&self, league_id: &str) -> ApiResult<League> {
        let url = format!("{SLEEPER_V1}/league/{league_id}");
        let raw: SleeperLeague = self.get(&url).await?;
        if raw.league_id.is_none() {
            return Err(ApiError::NotFound(format!("league {league_id}")));
        }
        Ok(map_league(raw))
    }

    /// Fetch all league members with their display/team names.
    pub async fn fetch_users(&self, league_id: &str) -> ApiResult<Vec<LeagueUser>> {
        let url = format!("{SLEEPER_V1}/league/{league_id}/users");
        let raw: Vec<SleeperUser> = self.get(&url).await?;
        Ok(raw.into_iter().map(map_user).collect())
    }

    /// Fetch all rosters with season records and scoring totals.
    pub async fn fetch_rosters(&self, league_id: &str) -> ApiResult<Vec<Roster>> {
        let url = format!("{SLEEPER_V1}/league/{league_id}/rosters");
        let raw: Vec<SleeperRoster> = self.get(&url).await?;
        Ok(raw.into_iter().filter_map(map_roster).collect())
    }

    /// Fetch one week's head-to-head matchups.
    pub async fn fetch_matchups(&self, league_id: &str, week: u8) -> ApiResult<Vec<Matchup>> {
        let url = format!("{SLEEPER_V1}/league/{league_id}/matchups/{week}");
        let raw: Vec<SleeperMatchup> = self.get(&url).await?;
        Ok(raw.into_iter().filter_map(map_matchup).collect())
    }

    /// Fetch the playoff winners bracket (championship side).
    pub async fn fetch_winners_bracket(&self, league_id: &str) -> ApiResult<Vec<BracketMatch>> {
        self.fetch_bracket(league_id, BracketSide::Winners).await
    }

    /// Fetch the playoff losers bracket (consolation side).
    pub async fn fetch_losers_bracket(&self, league_id: &str) -> ApiResult<Vec<BracketMatch>> {
        self.fetch_bracket(league_id, BracketSide::Losers).await
    }

    async fn fetch_bracket(
        &self,
        league_id: &str,
        side: BracketSide,
    ) -> ApiResult<Vec<BracketMatch>> {
        let path = match side {
            BracketSide::Winners => "winners_bracket",
            BracketSide::Losers => "losers_bracket",
        };
        let url = format!("{SLEEPER_V1}/league/{league_id}/{path}");
        let raw: Vec<SleeperBracketMatch> = self.get(&url).await?;
        Ok(raw
            .into_iter()
            .filter_map(|m| map_bracket_match(side, m))
            .collect())
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: Sleeper wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_league(raw: SleeperLeague) -> League {
    League {
        league_id: raw.league_id.unwrap_or_default(),
        name: raw.name.unwrap_or_else(|| "Sleeper League".into()),
        season: raw.season.unwrap_or_default(),
        total_rosters: raw.total_rosters.unwrap_or(0),
        playoff_week_start: raw.settings.and_then(|s| s.playoff_week_start),
    }
}

fn map_user(raw: SleeperUser) -> LeagueUser {
    // Custom team names live in user metadata; empty strings mean "unset".
    let team_name = raw
        .metadata
        .and_then(|m| m.team_name)
        .filter(|n| !n.trim().is_empty());
    LeagueUser {
        user_id: raw.user_id.unwrap_or_default(),
        display_name: raw.display_name.unwrap_or_else(|| "Unknown".into()),
        team_name,
        avatar: raw.avatar,
    }
}

/// Rosters without an id are unusable for bracket work and are dropped.
fn map_roster(raw: SleeperRoster) -> Option<Roster> {
    let roster_id = raw.roster_id?;
    let settings = raw.settings.unwrap_or_default();
    Some(Roster {
        roster_id,
        owner_id: raw.owner_id,
        wins: settings.wins.unwrap_or(0),
        losses: settings.losses.unwrap_or(0),
        ties: settings.ties.unwrap_or(0),
        points_for: settings.points_for(),
        points_against: settings.points_against(),
    })
}

fn map_matchup(raw: SleeperMatchup) -> Option<Matchup> {
    Some(Matchup {
        roster_id: raw.roster_id?,
        matchup_id: raw.matchup_id,
        points: raw.points.unwrap_or(0.0),
    })
}

/// Matches missing round or match id can't be addressed and are dropped.
fn map_bracket_match(side: BracketSide, raw: SleeperBracketMatch) -> Option<BracketMatch> {
    Some(BracketMatch {
        side,
        round: raw.r?,
        match_id: raw.m?,
        team1: map_bracket_team(raw.t1),
        team2: map_bracket_team(raw.t2),
        winner: raw.w,
        loser: raw.l,
        placement: raw.p,
    })
}

fn map_bracket_team(raw: Option<SleeperBracketTeam>) -> BracketTeam {
    match raw {
        Some(SleeperBracketTeam::Roster(id)) => BracketTeam::Roster(id),
        Some(SleeperBracketTeam::From(r)) => match (r.w, r.l) {
            (Some(m), _) => BracketTeam::WinnerOf(m),
            (None, Some(m)) => BracketTeam::LoserOf(m),
            (None, None) => BracketTeam::Tbd,
        },
        None => BracketTeam::Tbd,
    }
}
