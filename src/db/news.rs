use sqlx::PgPool;

use crate::models::news::{News, NewsSummary};

pub async fn get_news(pool: &PgPool, news_id: &str) -> Result<Option<News>, sqlx::Error> {
    let news = sqlx::query_as::<_, News>(
        r#"
        SELECT id, category, title, published_at, author, view_count,
               image_url, content, like_count
        FROM news
        WHERE id = $1
        "#,
    )
    .bind(news_id)
    .fetch_optional(pool)
    .await?;

    Ok(news)
}

pub async fn list_recent_news(pool: &PgPool, limit: i64) -> Result<Vec<NewsSummary>, sqlx::Error> {
    let news = sqlx::query_as::<_, NewsSummary>(
        r#"
        SELECT id, category, title, published_at, author, image_url,
               view_count, like_count
        FROM news
        ORDER BY published_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(news)
}

/// Bump the view counter and return the new value.
pub async fn increment_view_count(pool: &PgPool, news_id: &str) -> Result<i32, sqlx::Error> {
    let view_count = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE news
        SET view_count = view_count + 1
        WHERE id = $1
        RETURNING view_count
        "#,
    )
    .bind(news_id)
    .fetch_one(pool)
    .await?;

    Ok(view_count)
}

pub async fn user_has_liked(
    pool: &PgPool,
    user_id: i32,
    news_id: &str,
) -> Result<bool, sqlx::Error> {
    let liked = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM user_news_likes
            WHERE user_id = $1 AND news_id = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(news_id)
    .fetch_one(pool)
    .await?;

    Ok(liked)
}

/// Record a like and bump the counter, returning the new count.
pub async fn add_like(pool: &PgPool, user_id: i32, news_id: &str) -> Result<i32, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_news_likes (user_id, news_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(user_id)
    .bind(news_id)
    .execute(pool)
    .await?;

    let like_count = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE news
        SET like_count = like_count + 1
        WHERE id = $1
        RETURNING like_count
        "#,
    )
    .bind(news_id)
    .fetch_one(pool)
    .await?;

    Ok(like_count)
}

/// Remove a like and drop the counter, returning the new count.
pub async fn remove_like(pool: &PgPool, user_id: i32, news_id: &str) -> Result<i32, sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM user_news_likes
        WHERE user_id = $1 AND news_id = $2
        "#,
    )
    .bind(user_id)
    .bind(news_id)
    .execute(pool)
    .await?;

    let like_count = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE news
        SET like_count = like_count - 1
        WHERE id = $1
        RETURNING like_count
        "#,
    )
    .bind(news_id)
    .fetch_one(pool)
    .await?;

    Ok(like_count)
}
