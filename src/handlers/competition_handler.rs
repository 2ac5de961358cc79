use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::competitions;
use crate::models::common::{ApiResponse, PaginationQuery};
use crate::models::competition::CreateCompetitionRequest;

#[tracing::instrument(
    name = "Create competition",
    skip(body, pool),
    fields(competition_name = %body.name)
)]
pub async fn create_competition(
    body: web::Json<CreateCompetitionRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match competitions::insert_competition(&pool, &body).await {
        Ok(competition) => HttpResponse::Ok().json(competition),
        Err(e) => {
            tracing::error!("Failed to insert competition: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create competition"))
        }
    }
}

#[tracing::instrument(name = "List competitions", skip(query, pool))]
pub async fn read_competitions(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match competitions::list_competitions(&pool, query.skip(), query.limit()).await {
        Ok(competitions) => HttpResponse::Ok().json(competitions),
        Err(e) => {
            tracing::error!("Failed to list competitions: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to list competitions"))
        }
    }
}

#[tracing::instrument(name = "Get competition", skip(pool))]
pub async fn read_competition(competition_id: i32, pool: web::Data<PgPool>) -> HttpResponse {
    match competitions::get_competition(&pool, competition_id).await {
        Ok(Some(competition)) => HttpResponse::Ok().json(competition),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Competition not found")),
        Err(e) => {
            tracing::error!("Failed to fetch competition: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch competition"))
        }
    }
}
