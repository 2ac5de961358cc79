// src/routes/auth.rs
use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::auth_handler::login_user;
use crate::models::auth::LoginRequest;

#[post("/auth/login")]
async fn login(login_form: web::Json<LoginRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    login_user(login_form, pool).await
}
