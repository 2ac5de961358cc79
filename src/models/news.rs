use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    pub category: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub view_count: i32,
    pub image_url: String,
    pub content: String,
    pub like_count: i32,
}

/// Feed entry without the article body, used by the dashboard.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct NewsSummary {
    pub id: String,
    pub category: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub image_url: String,
    pub view_count: i32,
    pub like_count: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsDetailResponse {
    pub id: String,
    pub category: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub view_count: i32,
    pub image_url: String,
    pub content: String,
    pub like_count: i32,
    pub user_has_liked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeToggleResponse {
    pub like_count: i32,
    pub user_has_liked: bool,
}
