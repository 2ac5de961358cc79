use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::dashboard_handler;

#[get("/dashboard")]
async fn get_dashboard(pool: web::Data<PgPool>) -> HttpResponse {
    dashboard_handler::get_dashboard(pool).await
}
