use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{cards, users};
use crate::handlers::CURRENT_USER_ID;
use crate::models::card::{AddCardRequest, Card};
use crate::models::common::ApiResponse;
use crate::models::user::MemberProfileResponse;

#[tracing::instrument(name = "Get member profile", skip(pool))]
pub async fn get_member_profile(pool: web::Data<PgPool>) -> HttpResponse {
    match users::get_user(&pool, CURRENT_USER_ID).await {
        Ok(Some(user)) => HttpResponse::Ok().json(MemberProfileResponse::from(user)),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found")),
        Err(e) => {
            tracing::error!("Failed to fetch member profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch member profile"))
        }
    }
}

#[tracing::instrument(name = "List member cards", skip(pool))]
pub async fn list_member_cards(pool: web::Data<PgPool>) -> HttpResponse {
    match cards::list_cards(&pool, CURRENT_USER_ID).await {
        Ok(cards) => HttpResponse::Ok().json(cards),
        Err(e) => {
            tracing::error!("Failed to list cards: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to list cards"))
        }
    }
}

/// The supplied card token is not sent to any gateway, the stored card
/// carries mocked details.
#[tracing::instrument(name = "Add member card", skip(body, pool))]
pub async fn add_member_card(body: web::Json<AddCardRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    let card = Card {
        id: format!("card_{}", Uuid::new_v4()),
        user_id: CURRENT_USER_ID,
        brand: "Mastercard".to_string(),
        last_four: "1234".to_string(),
        holder_name: "SOCIO TORCEDOR".to_string(),
        expiry: "12/28".to_string(),
        is_default: body.is_default,
    };

    match cards::insert_card(&pool, &card).await {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(e) => {
            tracing::error!("Failed to insert card: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to add card"))
        }
    }
}

#[tracing::instrument(name = "Delete member card", skip(pool))]
pub async fn delete_member_card(card_id: String, pool: web::Data<PgPool>) -> HttpResponse {
    match cards::delete_card(&pool, CURRENT_USER_ID, &card_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Card not found")),
        Err(e) => {
            tracing::error!("Failed to delete card: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to delete card"))
        }
    }
}
