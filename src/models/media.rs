use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct PressConference {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub published_at: DateTime<Utc>,
}
