use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub user_id: i32,
    pub brand: String,
    pub last_four: String,
    pub holder_name: String,
    pub expiry: String,
    pub is_default: bool,
}

/// The card token is accepted but not processed, stored cards carry mocked
/// details until the payment gateway integration exists.
#[derive(Debug, Deserialize)]
pub struct AddCardRequest {
    pub card_token: String,
    #[serde(default)]
    pub is_default: bool,
}
