// Direct-insert fixtures for rows the API has no create endpoint for.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// The fixed account the member endpoints act on behalf of.
pub const MEMBER_ID: i32 = 1;

/// Insert the mock member account with a known id and password.
pub async fn seed_member(pool: &PgPool, email: &str, password: &str) -> i32 {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password, tubarao_id, full_name, cpf, phone)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(MEMBER_ID)
    .bind(format!("torcedor{}", MEMBER_ID))
    .bind(email)
    .bind(password)
    .bind("TUB-0001")
    .bind("Maria da Silva")
    .bind("123.456.789-00")
    .bind("+55 85 99999-0000")
    .execute(pool)
    .await
    .expect("Failed to seed member");

    MEMBER_ID
}

pub async fn seed_competition(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO competitions (name, country, description)
        VALUES ($1, 'Brasil', NULL)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to seed competition")
}

pub async fn seed_match(
    pool: &PgPool,
    competition_id: i32,
    status: &str,
    match_datetime: DateTime<Utc>,
    is_home_game: bool,
) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO matches
            (status, location, home_team, away_team, is_home_game,
             match_datetime, competition_id)
        VALUES ($1, 'Estádio Elzir Cabral', 'Ferroviário', 'Fortaleza', $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(status)
    .bind(is_home_game)
    .bind(match_datetime)
    .bind(competition_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed match")
}

pub async fn seed_news(pool: &PgPool, title: &str, published_at: DateTime<Utc>) -> String {
    let news_id = format!("news_{}", Uuid::new_v4());
    sqlx::query(
        r#"
        INSERT INTO news
            (id, category, title, published_at, author, image_url, content)
        VALUES ($1, 'Clube', $2, $3, 'Assessoria', 'https://cdn.example.com/news.jpg', 'corpo')
        "#,
    )
    .bind(&news_id)
    .bind(title)
    .bind(published_at)
    .execute(pool)
    .await
    .expect("Failed to seed news");

    news_id
}

pub async fn seed_press_conference(
    pool: &PgPool,
    title: &str,
    published_at: DateTime<Utc>,
) -> String {
    let id = format!("press_{}", Uuid::new_v4());
    sqlx::query(
        r#"
        INSERT INTO press_conferences (id, title, thumbnail_url, video_url, published_at)
        VALUES ($1, $2, 'https://cdn.example.com/thumb.jpg', 'https://cdn.example.com/video.mp4', $3)
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(published_at)
    .execute(pool)
    .await
    .expect("Failed to seed press conference");

    id
}

pub async fn seed_video(pool: &PgPool, title: &str, published_at: DateTime<Utc>) -> String {
    let id = format!("video_{}", Uuid::new_v4());
    sqlx::query(
        r#"
        INSERT INTO videos (id, title, thumbnail_url, video_url, published_at)
        VALUES ($1, $2, 'https://cdn.example.com/thumb.jpg', 'https://cdn.example.com/video.mp4', $3)
        "#,
    )
    .bind(&id)
    .bind(title)
    .bind(published_at)
    .execute(pool)
    .await
    .expect("Failed to seed video");

    id
}

pub async fn seed_ticket_category(
    pool: &PgPool,
    match_id: i32,
    name: &str,
    available_quantity: i32,
    price: i32,
) -> String {
    let id = format!("cat_{}", Uuid::new_v4());
    sqlx::query(
        r#"
        INSERT INTO ticket_categories (id, match_id, name, available_quantity, price)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&id)
    .bind(match_id)
    .bind(name)
    .bind(available_quantity)
    .bind(price)
    .execute(pool)
    .await
    .expect("Failed to seed ticket category");

    id
}

pub async fn seed_partner(pool: &PgPool, name: &str, is_featured: bool, how_to_use: &str) -> String {
    let id = format!("partner_{}", Uuid::new_v4());
    sqlx::query(
        r#"
        INSERT INTO partners
            (id, name, category, logo_url, discount, is_featured, description, how_to_use)
        VALUES ($1, $2, 'Alimentação', 'https://cdn.example.com/logo.png', '20%', $3, NULL, $4)
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(is_featured)
    .bind(how_to_use)
    .execute(pool)
    .await
    .expect("Failed to seed partner");

    id
}
