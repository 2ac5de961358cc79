use chrono::{Duration, Utc};
use reqwest::Client;

mod common;
use common::fixtures::{
    seed_competition, seed_match, seed_news, seed_press_conference, seed_video,
};
use common::utils::spawn_app;

#[tokio::test]
async fn dashboard_combines_next_match_news_and_media() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let competition_id = seed_competition(&test_app.db_pool, "Série D").await;
    let now = Utc::now();

    // two qualifying matches, the earlier one wins
    let soon = seed_match(
        &test_app.db_pool,
        competition_id,
        "upcoming",
        now + Duration::days(1),
        true,
    )
    .await;
    seed_match(
        &test_app.db_pool,
        competition_id,
        "upcoming",
        now + Duration::days(8),
        false,
    )
    .await;

    for i in 0..7 {
        seed_news(
            &test_app.db_pool,
            &format!("Notícia {}", i),
            now - Duration::hours(i),
        )
        .await;
    }
    for i in 0..4 {
        seed_press_conference(
            &test_app.db_pool,
            &format!("Coletiva {}", i),
            now - Duration::hours(i),
        )
        .await;
        seed_video(
            &test_app.db_pool,
            &format!("Vídeo {}", i),
            now - Duration::hours(i),
        )
        .await;
    }

    let response = client
        .get(&format!("{}/api/v1/dashboard", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let dashboard: serde_json::Value = response.json().await.unwrap();
    assert_eq!(dashboard["next_match"]["id"], soon);
    assert_eq!(dashboard["recent_news"].as_array().unwrap().len(), 5);
    assert_eq!(dashboard["recent_news"][0]["title"], "Notícia 0");
    assert_eq!(dashboard["press_conferences"].as_array().unwrap().len(), 3);
    assert_eq!(dashboard["videos"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn dashboard_omits_next_match_when_none_qualifies() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let competition_id = seed_competition(&test_app.db_pool, "Série D").await;
    seed_match(
        &test_app.db_pool,
        competition_id,
        "completed",
        Utc::now() - Duration::days(3),
        true,
    )
    .await;

    let response = client
        .get(&format!("{}/api/v1/dashboard", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let dashboard: serde_json::Value = response.json().await.unwrap();
    assert!(dashboard.get("next_match").is_none());
    assert!(dashboard["recent_news"].as_array().unwrap().is_empty());
}
