use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::news;
use crate::handlers::CURRENT_USER_ID;
use crate::models::common::ApiResponse;
use crate::models::news::{LikeToggleResponse, NewsDetailResponse};

/// Reading a news item bumps its view counter as a side effect.
#[tracing::instrument(name = "Get news detail", skip(pool))]
pub async fn get_news_detail(news_id: String, pool: web::Data<PgPool>) -> HttpResponse {
    let news_item = match news::get_news(&pool, &news_id).await {
        Ok(Some(news_item)) => news_item,
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("News not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch news: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch news"));
        }
    };

    let view_count = match news::increment_view_count(&pool, &news_id).await {
        Ok(view_count) => view_count,
        Err(e) => {
            tracing::error!("Failed to increment view count: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch news"));
        }
    };

    let user_has_liked = match news::user_has_liked(&pool, CURRENT_USER_ID, &news_id).await {
        Ok(user_has_liked) => user_has_liked,
        Err(e) => {
            tracing::error!("Failed to check like state: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch news"));
        }
    };

    HttpResponse::Ok().json(NewsDetailResponse {
        id: news_item.id,
        category: news_item.category,
        title: news_item.title,
        published_at: news_item.published_at,
        author: news_item.author,
        view_count,
        image_url: news_item.image_url,
        content: news_item.content,
        like_count: news_item.like_count,
        user_has_liked,
    })
}

/// Toggle the (user, news) like row and keep `like_count` in step.
#[tracing::instrument(name = "Toggle news like", skip(pool))]
pub async fn toggle_news_like(news_id: String, pool: web::Data<PgPool>) -> HttpResponse {
    match news::get_news(&pool, &news_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("News not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch news: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to toggle like"));
        }
    }

    let already_liked = match news::user_has_liked(&pool, CURRENT_USER_ID, &news_id).await {
        Ok(already_liked) => already_liked,
        Err(e) => {
            tracing::error!("Failed to check like state: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to toggle like"));
        }
    };

    let result = if already_liked {
        news::remove_like(&pool, CURRENT_USER_ID, &news_id).await
    } else {
        news::add_like(&pool, CURRENT_USER_ID, &news_id).await
    };

    match result {
        Ok(like_count) => HttpResponse::Ok().json(LikeToggleResponse {
            like_count,
            user_has_liked: !already_liked,
        }),
        Err(e) => {
            tracing::error!("Failed to toggle like: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to toggle like"))
        }
    }
}
