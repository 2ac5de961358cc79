use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::matches;
use crate::models::common::ApiResponse;
use crate::models::matches::{CreateMatchRequest, MatchListQuery};

#[tracing::instrument(
    name = "Create match",
    skip(body, pool),
    fields(home_team = %body.home_team, away_team = %body.away_team)
)]
pub async fn create_match(
    body: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match matches::insert_match(&pool, &body).await {
        Ok(match_row) => HttpResponse::Ok().json(match_row),
        Err(e) => {
            tracing::error!("Failed to insert match: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to create match"))
        }
    }
}

#[tracing::instrument(name = "List matches", skip(query, pool))]
pub async fn read_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(100).max(0);

    match matches::list_matches(&pool, skip, limit, query.is_home_game).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to list matches"))
        }
    }
}

#[tracing::instrument(name = "Get match", skip(pool))]
pub async fn read_match(match_id: i32, pool: web::Data<PgPool>) -> HttpResponse {
    match matches::get_match(&pool, match_id).await {
        Ok(Some(match_row)) => HttpResponse::Ok().json(match_row),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")),
        Err(e) => {
            tracing::error!("Failed to fetch match: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to fetch match"))
        }
    }
}

#[tracing::instrument(name = "Get games schedule", skip(pool))]
pub async fn get_games_schedule(pool: web::Data<PgPool>) -> HttpResponse {
    match matches::list_schedule(&pool).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to fetch games schedule: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch games schedule"))
        }
    }
}

#[tracing::instrument(name = "Get home games", skip(pool))]
pub async fn get_home_games(pool: web::Data<PgPool>) -> HttpResponse {
    match matches::list_home_games(&pool).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => {
            tracing::error!("Failed to fetch home games: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to fetch home games"))
        }
    }
}
