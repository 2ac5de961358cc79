use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::players;
use crate::models::common::{ApiResponse, PaginationQuery};
use crate::models::player::CreatePlayerRequest;

#[tracing::instrument(
    name = "Create player",
    skip(body, pool),
    fields(player_name = %body.name)
)]
pub async fn create_player(
    body: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match players::insert_player(&pool, &body).await {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => {
            tracing::error!("Failed to insert player: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to create player"))
        }
    }
}

#[tracing::instrument(name = "List players", skip(query, pool))]
pub async fn read_players(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match players::list_players(&pool, query.skip(), query.limit()).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => {
            tracing::error!("Failed to list players: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to list players"))
        }
    }
}

#[tracing::instrument(name = "Get player", skip(pool))]
pub async fn read_player(player_id: i32, pool: web::Data<PgPool>) -> HttpResponse {
    match players::get_player(&pool, player_id).await {
        Ok(Some(player)) => HttpResponse::Ok().json(player),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Player not found")),
        Err(e) => {
            tracing::error!("Failed to fetch player: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to fetch player"))
        }
    }
}
