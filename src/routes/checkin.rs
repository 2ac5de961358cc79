use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::checkin_handler;

#[post("/matches/{match_id}/checkin")]
async fn check_in(path: web::Path<i32>, pool: web::Data<PgPool>) -> HttpResponse {
    checkin_handler::check_in(path.into_inner(), pool).await
}
