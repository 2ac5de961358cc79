use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::benefit_handler;

#[get("/benefits")]
async fn list_benefits(pool: web::Data<PgPool>) -> HttpResponse {
    benefit_handler::list_benefits(pool).await
}

#[get("/benefits/{partner_id}")]
async fn get_benefit_detail(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    benefit_handler::get_benefit_detail(path.into_inner(), pool).await
}
