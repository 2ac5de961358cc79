use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::competition_handler;
use crate::models::common::PaginationQuery;
use crate::models::competition::CreateCompetitionRequest;

#[post("/competitions/")]
async fn create_competition(
    body: web::Json<CreateCompetitionRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    competition_handler::create_competition(body, pool).await
}

#[get("/competitions/")]
async fn read_competitions(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    competition_handler::read_competitions(query, pool).await
}

#[get("/competitions/{competition_id}")]
async fn read_competition(path: web::Path<i32>, pool: web::Data<PgPool>) -> HttpResponse {
    competition_handler::read_competition(path.into_inner(), pool).await
}
