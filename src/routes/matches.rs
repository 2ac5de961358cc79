use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::match_handler;
use crate::models::matches::{CreateMatchRequest, MatchListQuery};

#[post("/matches/")]
async fn create_match(body: web::Json<CreateMatchRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::create_match(body, pool).await
}

#[get("/matches/")]
async fn read_matches(query: web::Query<MatchListQuery>, pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::read_matches(query, pool).await
}

#[get("/matches/{match_id}")]
async fn read_match(path: web::Path<i32>, pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::read_match(path.into_inner(), pool).await
}

#[get("/games_schedule/")]
async fn get_games_schedule(pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::get_games_schedule(pool).await
}

#[get("/home_games/")]
async fn get_home_games(pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::get_home_games(pool).await
}
