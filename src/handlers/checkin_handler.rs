use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::{checkins, matches};
use crate::handlers::CURRENT_USER_ID;
use crate::models::common::ApiResponse;
use crate::models::matches::match_status;

#[tracing::instrument(name = "Match check-in", skip(pool))]
pub async fn check_in(match_id: i32, pool: web::Data<PgPool>) -> HttpResponse {
    let match_row = match matches::get_match(&pool, match_id).await {
        Ok(Some(match_row)) => match_row,
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch match: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to check in"));
        }
    };

    if match_row.status != match_status::CHECKIN_OPEN {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Check-in is not open for this match"));
    }

    // Existence check only, the table carries no unique (user, match) constraint.
    match checkins::find_checkin(&pool, CURRENT_USER_ID, match_id).await {
        Ok(Some(_)) => {
            return HttpResponse::Conflict()
                .json(ApiResponse::<()>::error("Already checked in for this match"));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to look up existing check-in: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to check in"));
        }
    }

    let checkin_time = Utc::now();
    let qr_code_url = format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=CHECKIN-{}-{}",
        match_id, CURRENT_USER_ID
    );

    match checkins::insert_checkin(&pool, CURRENT_USER_ID, match_id, checkin_time, &qr_code_url).await
    {
        Ok(checkin) => HttpResponse::Ok().json(checkin),
        Err(e) => {
            tracing::error!("Failed to insert check-in: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to check in"))
        }
    }
}
