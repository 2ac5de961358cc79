use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::news_handler;

#[get("/news/{news_id}")]
async fn get_news_detail(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    news_handler::get_news_detail(path.into_inner(), pool).await
}

#[post("/news/{news_id}/like")]
async fn toggle_like(path: web::Path<String>, pool: web::Data<PgPool>) -> HttpResponse {
    news_handler::toggle_news_like(path.into_inner(), pool).await
}
