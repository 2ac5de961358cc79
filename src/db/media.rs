use sqlx::PgPool;

use crate::models::media::{PressConference, Video};

pub async fn list_recent_press_conferences(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<PressConference>, sqlx::Error> {
    let press_conferences = sqlx::query_as::<_, PressConference>(
        r#"
        SELECT id, title, thumbnail_url, video_url, published_at
        FROM press_conferences
        ORDER BY published_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(press_conferences)
}

pub async fn list_recent_videos(pool: &PgPool, limit: i64) -> Result<Vec<Video>, sqlx::Error> {
    let videos = sqlx::query_as::<_, Video>(
        r#"
        SELECT id, title, thumbnail_url, video_url, published_at
        FROM videos
        ORDER BY published_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(videos)
}
