use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::status_handler;

#[get("/")]
async fn read_root() -> HttpResponse {
    status_handler::read_root().await
}

#[get("/status")]
async fn get_status(pool: web::Data<PgPool>) -> HttpResponse {
    status_handler::get_status(&pool).await
}
