use chrono::{DateTime, Duration, TimeZone, Utc};

use serde_json::Value;

use super::deck::Deck;
use super::player::Player;
use super::result::MatchResult;

use ::errors::*;

/// A finished match as stored in the replay archive.
///
/// Built by `replay::decode`; every field missing from the archived json takes its default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Replay
{
    /* Archive key, e.g. "ib0Qt-pp8PL" */
    pub code: String,
    /* Seconds since the epoch with fractional part. 0, null and absent all mean "not recorded" */
    #[serde(rename = "startTime")]
    pub start_time: Option<f64>,
    #[serde(rename = "endTime")]
    pub end_time: Option<f64>,

    #[serde(rename = "deckInfo")]
    pub deck: Deck,
    /* Index 0 is seat one, index 1 is seat two */
    #[serde(rename = "playerInfo")]
    pub players: Vec<Player>,
    #[serde(rename = "commandInfo", skip_serializing_if = "Option::is_none")]
    pub command_info: Option<CommandInfo>,
    #[serde(rename = "timeInfo")]
    pub time_info: TimeInfo,
    #[serde(rename = "ratingInfo")]
    pub rating_info: RatingInfo,
    #[serde(rename = "versionInfo")]
    pub version_info: VersionInfo,

    pub result: MatchResult,
    pub seed: i64,
    #[serde(rename = "endCondition")]
    pub end_condition: i64,
    pub format: i64,
    #[serde(rename = "rawHash")]
    pub raw_hash: i64,
}

impl Replay
{
    /// Time the match began, truncated to the second.
    pub fn start_time(&self) -> Result<DateTime<Utc>>
    {
        to_instant(self.start_time, "start")
    }

    /// Time the match ended, truncated to the second.
    pub fn end_time(&self) -> Result<DateTime<Utc>>
    {
        to_instant(self.end_time, "end")
    }

    /// Elapsed time between start and end, never negative.
    pub fn duration(&self) -> Result<Duration>
    {
        let start = self.start_time()?;
        let end = self.end_time()?;

        Ok(duration(start, end))
    }

    pub fn player_one(&self) -> Result<&Player>
    {
        self.seat(1)
    }

    pub fn player_two(&self) -> Result<&Player>
    {
        self.seat(2)
    }

    /// The player occupying a 1-based seat.
    pub fn seat(&self, seat: usize) -> Result<&Player>
    {
        if seat < 1
        {
            bail!(ErrorKind::MissingPlayer(seat));
        }

        self.players.get(seat - 1)
            .ok_or_else(|| ErrorKind::MissingPlayer(seat).into())
    }
}

fn to_instant(seconds: Option<f64>, field: &'static str) -> Result<DateTime<Utc>>
{
    let seconds = match seconds
    {
        Some(seconds) if seconds > 0.0 => seconds,
        _ => bail!(ErrorKind::MissingTime(field)),
    };

    /* Only whole seconds are significant, `as` truncates the fraction */
    Utc.timestamp_opt(seconds as i64, 0)
        .single()
        .ok_or_else(|| ErrorKind::MissingTime(field).into())
}

/// Span between two instants regardless of which one comes first.
fn duration(mut a: DateTime<Utc>, mut b: DateTime<Utc>) -> Duration
{
    if b < a
    {
        ::std::mem::swap(&mut a, &mut b);
    }

    b.signed_duration_since(a)
}

/// Clock settings of a match.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeInfo {
    pub correspondence: bool,
    pub player_current_time_banks: Vec<f64>,
    pub player_time: Vec<PlayerTime>,
    pub grace_period: i64,
    pub player_current_times: Vec<i64>,
    pub turn_number: i64,
    pub grace_current_time: i64,
    pub use_clocks: bool,
}

/// One seat's time bank.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerTime {
    pub bank_dilution: f64,
    pub initial: i64,
    pub bank: i64,
    pub increment: i64,
}

/// Ratings before and after the match. Every list is indexed by seat.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingInfo {
    pub initial_ratings: Vec<Rating>,
    pub final_ratings: Vec<Rating>,
    pub rating_changes: Vec<Vec<f64>>,
    pub score_changes: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Rating {
    pub display_rating: f64,
    pub win_last_last: bool,
    #[serde(rename = "dominionELO")]
    pub dominion_elo: i64,
    pub win_last: bool,
    pub peak_adjusted_shalev_u: f64,
    pub shalev_v: f64,
    pub shalev_u: f64,
    pub tier: i64,
    pub custom_games_played: i64,
    pub tier_percent: f64,
    pub casual_games_won: i64,
    pub h_stars: i64,
    pub version: i64,
    pub exp: i64,
    pub rated_games_played: i64,
    pub bot_games_played: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionInfo {
    pub server_version: i64,
    /* Client build per seat */
    pub player_versions: Vec<String>,
}

/// The command log of a match. Kept structurally, never replayed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CommandInfo {
    pub command_list: Vec<Command>,
    pub command_times: Vec<f64>,
    pub command_forced: Vec<bool>,
    pub times_remaining: Vec<i64>,
    pub time_banks_remaining: Vec<f64>,
    pub move_durations: Vec<f64>,
    pub clicks_per_turn: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Command {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_id")]
    pub id: i64,
    /* Shape depends on `kind` (emotes carry colours and frames) */
    #[serde(rename = "_params", skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}
