// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::users;
use crate::models::auth::{LoginRequest, LoginSuccessResponse, LoginUser};
use crate::models::common::ApiResponse;

// TODO: issue a real JWT once the auth service lands.
const DUMMY_ACCESS_TOKEN: &str = "eyJhbGci0iJIUzI1NiIsInR5cCI6IkpXVCJ9...";

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool),
    fields(email = %login_form.email)
)]
pub async fn login_user(login_form: web::Json<LoginRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    let user = match users::find_user_by_email(&pool, &login_form.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid credentials"));
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Plaintext comparison, passwords are not hashed yet.
    if user.password != login_form.password.expose_secret() {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid credentials"));
    }

    HttpResponse::Ok().json(LoginSuccessResponse {
        access_token: DUMMY_ACCESS_TOKEN.to_string(),
        user: LoginUser {
            id: user.id.to_string(),
            name: user.username,
            email: user.email,
        },
    })
}
