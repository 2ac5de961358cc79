use serde::{Deserialize, Serialize};

use crate::models::matches::Match;
use crate::models::media::{PressConference, Video};
use crate::models::news::NewsSummary;

/// Composite payload for the app home screen.
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_match: Option<Match>,
    pub recent_news: Vec<NewsSummary>,
    pub press_conferences: Vec<PressConference>,
    pub videos: Vec<Video>,
}
