use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::checkin::Checkin;

pub async fn find_checkin(
    pool: &PgPool,
    user_id: i32,
    match_id: i32,
) -> Result<Option<Checkin>, sqlx::Error> {
    let checkin = sqlx::query_as::<_, Checkin>(
        r#"
        SELECT id, user_id, match_id, checkin_time, qr_code_url
        FROM checkins
        WHERE user_id = $1 AND match_id = $2
        "#,
    )
    .bind(user_id)
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    Ok(checkin)
}

pub async fn insert_checkin(
    pool: &PgPool,
    user_id: i32,
    match_id: i32,
    checkin_time: DateTime<Utc>,
    qr_code_url: &str,
) -> Result<Checkin, sqlx::Error> {
    let checkin = sqlx::query_as::<_, Checkin>(
        r#"
        INSERT INTO checkins (user_id, match_id, checkin_time, qr_code_url)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, match_id, checkin_time, qr_code_url
        "#,
    )
    .bind(user_id)
    .bind(match_id)
    .bind(checkin_time)
    .bind(qr_code_url)
    .fetch_one(pool)
    .await?;

    Ok(checkin)
}
