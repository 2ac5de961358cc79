use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::member_handler;
use crate::models::card::AddCardRequest;

#[get("/member/profile")]
async fn get_profile(pool: web::Data<PgPool>) -> HttpResponse {
    member_handler::get_member_profile(pool).await
}

#[get("/member/cards")]
async fn list_cards(pool: web::Data<PgPool>) -> HttpResponse {
    member_handler::list_member_cards(pool).await
}

#[post("/member/cards")]
async fn add_card(body: web::Json<AddCardRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    member_handler::add_member_card(body, pool).await
}

#[delete("/member/cards/{card_id}")]
async fn delete_card(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    member_handler::delete_member_card(path.into_inner(), pool).await
}
