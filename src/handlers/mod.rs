pub mod auth_handler;
pub mod benefit_handler;
pub mod checkin_handler;
pub mod competition_handler;
pub mod dashboard_handler;
pub mod match_handler;
pub mod member_handler;
pub mod news_handler;
pub mod player_handler;
pub mod status_handler;
pub mod ticket_handler;

/// Access tokens are not validated yet, every member endpoint acts on behalf
/// of this fixed account.
pub const CURRENT_USER_ID: i32 = 1;
