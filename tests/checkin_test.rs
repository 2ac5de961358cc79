use chrono::{Duration, Utc};
use reqwest::Client;

mod common;
use common::fixtures::{seed_competition, seed_match, seed_member};
use common::utils::spawn_app;

#[tokio::test]
async fn first_checkin_succeeds_and_second_conflicts() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;
    let competition_id = seed_competition(&test_app.db_pool, "Série D").await;
    let match_id = seed_match(
        &test_app.db_pool,
        competition_id,
        "CHECKIN_OPEN",
        Utc::now(),
        true,
    )
    .await;

    let first = client
        .post(&format!(
            "{}/api/v1/matches/{}/checkin",
            &test_app.address, match_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(first.status().is_success());

    let checkin: serde_json::Value = first.json().await.unwrap();
    assert_eq!(checkin["match_id"], match_id);
    assert!(checkin["qr_code_url"].as_str().unwrap().contains("CHECKIN-"));

    let second = client
        .post(&format!(
            "{}/api/v1/matches/{}/checkin",
            &test_app.address, match_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(second.status().as_u16(), 409);

    let row_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM checkins WHERE match_id = $1")
        .bind(match_id)
        .fetch_one(&test_app.db_pool)
        .await
        .unwrap();
    assert_eq!(row_count, 1);
}

#[tokio::test]
async fn checkin_requires_the_match_to_be_open() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;
    let competition_id = seed_competition(&test_app.db_pool, "Série D").await;
    let match_id = seed_match(
        &test_app.db_pool,
        competition_id,
        "SALE_OPEN",
        Utc::now() + Duration::days(1),
        true,
    )
    .await;

    let response = client
        .post(&format!(
            "{}/api/v1/matches/{}/checkin",
            &test_app.address, match_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn checkin_for_a_missing_match_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;

    let response = client
        .post(&format!("{}/api/v1/matches/777777/checkin", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}
