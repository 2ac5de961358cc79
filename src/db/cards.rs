use sqlx::PgPool;

use crate::models::card::Card;

pub async fn list_cards(pool: &PgPool, user_id: i32) -> Result<Vec<Card>, sqlx::Error> {
    let cards = sqlx::query_as::<_, Card>(
        r#"
        SELECT id, user_id, brand, last_four, holder_name, expiry, is_default
        FROM cards
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

pub async fn insert_card(pool: &PgPool, card: &Card) -> Result<Card, sqlx::Error> {
    let card = sqlx::query_as::<_, Card>(
        r#"
        INSERT INTO cards (id, user_id, brand, last_four, holder_name, expiry, is_default)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, brand, last_four, holder_name, expiry, is_default
        "#,
    )
    .bind(&card.id)
    .bind(card.user_id)
    .bind(&card.brand)
    .bind(&card.last_four)
    .bind(&card.holder_name)
    .bind(&card.expiry)
    .bind(card.is_default)
    .fetch_one(pool)
    .await?;

    Ok(card)
}

/// Delete a card scoped to its owner. Returns false when no row matched.
pub async fn delete_card(pool: &PgPool, user_id: i32, card_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM cards
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(card_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
