use sqlx::PgPool;

use crate::models::matches::{match_status, CreateMatchRequest, Match};

const MATCH_COLUMNS: &str = "id, status, location, home_team, away_team, home_score, away_score, \
     is_home_game, match_datetime, highlights_url, competition_id";

pub async fn insert_match(
    pool: &PgPool,
    request: &CreateMatchRequest,
) -> Result<Match, sqlx::Error> {
    let match_row = sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches
            (status, location, home_team, away_team, home_score, away_score,
             is_home_game, match_datetime, highlights_url, competition_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, status, location, home_team, away_team, home_score, away_score,
                  is_home_game, match_datetime, highlights_url, competition_id
        "#,
    )
    .bind(&request.status)
    .bind(&request.location)
    .bind(&request.home_team)
    .bind(&request.away_team)
    .bind(request.home_score)
    .bind(request.away_score)
    .bind(request.is_home_game)
    .bind(request.match_datetime)
    .bind(&request.highlights_url)
    .bind(request.competition_id)
    .fetch_one(pool)
    .await?;

    Ok(match_row)
}

pub async fn list_matches(
    pool: &PgPool,
    skip: i64,
    limit: i64,
    is_home_game: Option<bool>,
) -> Result<Vec<Match>, sqlx::Error> {
    let matches = if let Some(is_home_game) = is_home_game {
        sqlx::query_as::<_, Match>(&format!(
            r#"
            SELECT {MATCH_COLUMNS}
            FROM matches
            WHERE is_home_game = $1
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(is_home_game)
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Match>(&format!(
            r#"
            SELECT {MATCH_COLUMNS}
            FROM matches
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(pool)
        .await?
    };

    Ok(matches)
}

pub async fn get_match(pool: &PgPool, match_id: i32) -> Result<Option<Match>, sqlx::Error> {
    let match_row = sqlx::query_as::<_, Match>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE id = $1
        "#
    ))
    .bind(match_id)
    .fetch_optional(pool)
    .await?;

    Ok(match_row)
}

/// Upcoming and live matches, earliest first.
pub async fn list_schedule(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    let matches = sqlx::query_as::<_, Match>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE status = $1 OR status = $2
        ORDER BY match_datetime
        "#
    ))
    .bind(match_status::UPCOMING)
    .bind(match_status::LIVE)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

pub async fn list_home_games(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    let matches = sqlx::query_as::<_, Match>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE is_home_game = TRUE AND (status = $1 OR status = $2)
        ORDER BY match_datetime
        "#
    ))
    .bind(match_status::UPCOMING)
    .bind(match_status::LIVE)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

/// The earliest upcoming or live match, if any.
pub async fn next_match(pool: &PgPool) -> Result<Option<Match>, sqlx::Error> {
    let match_row = sqlx::query_as::<_, Match>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE status = $1 OR status = $2
        ORDER BY match_datetime
        LIMIT 1
        "#
    ))
    .bind(match_status::UPCOMING)
    .bind(match_status::LIVE)
    .fetch_optional(pool)
    .await?;

    Ok(match_row)
}

/// Matches currently selling tickets or open for check-in.
pub async fn list_sale_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    let matches = sqlx::query_as::<_, Match>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM matches
        WHERE status = $1 OR status = $2
        ORDER BY match_datetime
        "#
    ))
    .bind(match_status::SALE_OPEN)
    .bind(match_status::CHECKIN_OPEN)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}
