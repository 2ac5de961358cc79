use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Known match statuses. The column is free text, these are the values the
/// app actually writes and filters on.
pub mod match_status {
    pub const UPCOMING: &str = "upcoming";
    pub const LIVE: &str = "live";
    pub const COMPLETED: &str = "completed";
    pub const SALE_OPEN: &str = "SALE_OPEN";
    pub const CHECKIN_OPEN: &str = "CHECKIN_OPEN";
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub id: i32,
    pub status: String,
    pub location: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub is_home_game: bool,
    pub match_datetime: DateTime<Utc>,
    pub highlights_url: Option<String>,
    pub competition_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub competition_id: i32,
    pub home_team: String,
    pub away_team: String,
    pub match_datetime: DateTime<Utc>,
    pub location: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub highlights_url: Option<String>,
    #[serde(default)]
    pub is_home_game: bool,
}

fn default_status() -> String {
    match_status::UPCOMING.to_string()
}

/// Query parameters for `GET /matches/`
#[derive(Debug, Deserialize)]
pub struct MatchListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub is_home_game: Option<bool>,
}
