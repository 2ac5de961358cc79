use sqlx::PgPool;

use crate::models::player::{CreatePlayerRequest, Player};

pub async fn insert_player(
    pool: &PgPool,
    request: &CreatePlayerRequest,
) -> Result<Player, sqlx::Error> {
    let player = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (name, number, position, nationality)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, number, position, nationality
        "#,
    )
    .bind(&request.name)
    .bind(request.number)
    .bind(&request.position)
    .bind(&request.nationality)
    .fetch_one(pool)
    .await?;

    Ok(player)
}

pub async fn list_players(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Player>, sqlx::Error> {
    let players = sqlx::query_as::<_, Player>(
        r#"
        SELECT id, name, number, position, nationality
        FROM players
        ORDER BY id
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(skip)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(players)
}

pub async fn get_player(pool: &PgPool, player_id: i32) -> Result<Option<Player>, sqlx::Error> {
    let player = sqlx::query_as::<_, Player>(
        r#"
        SELECT id, name, number, position, nationality
        FROM players
        WHERE id = $1
        "#,
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await?;

    Ok(player)
}
