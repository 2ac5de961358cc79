use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompetitionRequest {
    pub name: String,
    pub country: String,
    pub description: Option<String>,
}
