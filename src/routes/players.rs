use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::player_handler;
use crate::models::common::PaginationQuery;
use crate::models::player::CreatePlayerRequest;

#[post("/players/")]
async fn create_player(
    body: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    player_handler::create_player(body, pool).await
}

#[get("/players/")]
async fn read_players(query: web::Query<PaginationQuery>, pool: web::Data<PgPool>) -> HttpResponse {
    player_handler::read_players(query, pool).await
}

#[get("/players/{player_id}")]
async fn read_player(path: web::Path<i32>, pool: web::Data<PgPool>) -> HttpResponse {
    player_handler::read_player(path.into_inner(), pool).await
}
