use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub mod order_status {
    pub const PENDING: &str = "PENDING";
    pub const CONFIRMED: &str = "CONFIRMED";
    pub const FAILED: &str = "FAILED";
}

/// Inventory row. `price` is in minor currency units (centavos).
#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct TicketCategory {
    pub id: String,
    pub match_id: i32,
    pub name: String,
    pub available_quantity: i32,
    pub price: i32,
}

/// Category as exposed in the sales listing, price converted to major units.
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketCategoryResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub available_quantity: i32,
}

impl From<TicketCategory> for TicketCategoryResponse {
    fn from(category: TicketCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            price: category.price as f64 / 100.0,
            available_quantity: category.available_quantity,
        }
    }
}

/// One match open for sale or check-in, with its ticket categories.
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketSaleMatch {
    pub id: i32,
    pub status: String,
    pub location: String,
    pub home_team: String,
    pub away_team: String,
    pub match_datetime: DateTime<Utc>,
    pub categories: Vec<TicketCategoryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseTicketRequest {
    pub match_id: i32,
    pub ticket_category_id: String,
    pub quantity: i32,
    pub payment_method: String,
    pub card_id: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: i32,
    pub match_id: i32,
    pub ticket_category_id: String,
    pub quantity: i32,
    pub payment_method: String,
    pub card_id: Option<String>,
    pub status: String,
    pub qr_code_url: String,
    pub ordered_at: DateTime<Utc>,
}
