use sqlx::PgPool;

use crate::models::ticket::{Order, TicketCategory};

pub async fn list_categories_for_match(
    pool: &PgPool,
    match_id: i32,
) -> Result<Vec<TicketCategory>, sqlx::Error> {
    let categories = sqlx::query_as::<_, TicketCategory>(
        r#"
        SELECT id, match_id, name, available_quantity, price
        FROM ticket_categories
        WHERE match_id = $1
        ORDER BY price
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

pub async fn get_category(
    pool: &PgPool,
    category_id: &str,
) -> Result<Option<TicketCategory>, sqlx::Error> {
    let category = sqlx::query_as::<_, TicketCategory>(
        r#"
        SELECT id, match_id, name, available_quantity, price
        FROM ticket_categories
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

pub async fn decrement_available_quantity(
    pool: &PgPool,
    category_id: &str,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE ticket_categories
        SET available_quantity = available_quantity - $2
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .bind(quantity)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_order(pool: &PgPool, order: &Order) -> Result<Order, sqlx::Error> {
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders
            (id, user_id, match_id, ticket_category_id, quantity,
             payment_method, card_id, status, qr_code_url, ordered_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, user_id, match_id, ticket_category_id, quantity,
                  payment_method, card_id, status, qr_code_url, ordered_at
        "#,
    )
    .bind(&order.id)
    .bind(order.user_id)
    .bind(order.match_id)
    .bind(&order.ticket_category_id)
    .bind(order.quantity)
    .bind(&order.payment_method)
    .bind(&order.card_id)
    .bind(&order.status)
    .bind(&order.qr_code_url)
    .bind(order.ordered_at)
    .fetch_one(pool)
    .await?;

    Ok(order)
}
