use sqlx::PgPool;

use crate::models::competition::{Competition, CreateCompetitionRequest};

pub async fn insert_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition, sqlx::Error> {
    let competition = sqlx::query_as::<_, Competition>(
        r#"
        INSERT INTO competitions (name, country, description)
        VALUES ($1, $2, $3)
        RETURNING id, name, country, description
        "#,
    )
    .bind(&request.name)
    .bind(&request.country)
    .bind(&request.description)
    .fetch_one(pool)
    .await?;

    Ok(competition)
}

pub async fn list_competitions(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Competition>, sqlx::Error> {
    let competitions = sqlx::query_as::<_, Competition>(
        r#"
        SELECT id, name, country, description
        FROM competitions
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(competitions)
}

pub async fn get_competition(
    pool: &PgPool,
    competition_id: i32,
) -> Result<Option<Competition>, sqlx::Error> {
    let competition = sqlx::query_as::<_, Competition>(
        r#"
        SELECT id, name, country, description
        FROM competitions
        WHERE id = $1
        "#,
    )
    .bind(competition_id)
    .fetch_optional(pool)
    .await?;

    Ok(competition)
}
