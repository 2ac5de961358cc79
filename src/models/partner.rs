use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Partner row as stored. `how_to_use` is a JSON-encoded list of steps.
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub discount: String,
    pub is_featured: bool,
    pub description: Option<String>,
    pub how_to_use: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub discount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BenefitsResponse {
    pub featured: Vec<PartnerSummary>,
    pub partners: Vec<PartnerSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PartnerDetailResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub logo_url: String,
    pub discount: String,
    pub is_featured: bool,
    pub description: Option<String>,
    pub how_to_use: Vec<String>,
}
