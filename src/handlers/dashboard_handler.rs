use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::{matches, media, news};
use crate::models::common::ApiResponse;
use crate::models::dashboard::DashboardResponse;

const RECENT_NEWS_LIMIT: i64 = 5;
const RECENT_MEDIA_LIMIT: i64 = 3;

#[tracing::instrument(name = "Get dashboard", skip(pool))]
pub async fn get_dashboard(pool: web::Data<PgPool>) -> HttpResponse {
    let next_match = match matches::next_match(&pool).await {
        Ok(next_match) => next_match,
        Err(e) => {
            tracing::error!("Failed to fetch next match: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch dashboard"));
        }
    };

    let recent_news = match news::list_recent_news(&pool, RECENT_NEWS_LIMIT).await {
        Ok(recent_news) => recent_news,
        Err(e) => {
            tracing::error!("Failed to fetch recent news: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch dashboard"));
        }
    };

    let press_conferences = match media::list_recent_press_conferences(&pool, RECENT_MEDIA_LIMIT).await
    {
        Ok(press_conferences) => press_conferences,
        Err(e) => {
            tracing::error!("Failed to fetch press conferences: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch dashboard"));
        }
    };

    let videos = match media::list_recent_videos(&pool, RECENT_MEDIA_LIMIT).await {
        Ok(videos) => videos,
        Err(e) => {
            tracing::error!("Failed to fetch videos: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch dashboard"));
        }
    };

    HttpResponse::Ok().json(DashboardResponse {
        next_match,
        recent_news,
        press_conferences,
        videos,
    })
}
