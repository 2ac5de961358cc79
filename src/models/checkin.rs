use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Checkin {
    pub id: i32,
    pub user_id: i32,
    pub match_id: i32,
    pub checkin_time: DateTime<Utc>,
    pub qr_code_url: String,
}
