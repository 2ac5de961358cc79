use reqwest::Client;
use serde_json::json;

mod common;
use common::fixtures::seed_member;
use common::utils::spawn_app;

#[tokio::test]
async fn profile_returns_the_member_fields() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;

    let response = client
        .get(&format!("{}/api/v1/member/profile", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(profile["email"], "maria@example.com");
    assert_eq!(profile["full_name"], "Maria da Silva");
    assert_eq!(profile["tubarao_id"], "TUB-0001");
    assert_eq!(profile["cpf"], "123.456.789-00");
    // password never leaves the server
    assert!(profile.get("password").is_none());
}

#[tokio::test]
async fn profile_without_a_member_row_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/api/v1/member/profile", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn added_card_shows_up_in_the_listing_with_mocked_details() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;

    let empty: Vec<serde_json::Value> = client
        .get(&format!("{}/api/v1/member/cards", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert!(empty.is_empty());

    let add_response = client
        .post(&format!("{}/api/v1/member/cards", &test_app.address))
        .json(&json!({ "card_token": "tok_abc123", "is_default": true }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(add_response.status().is_success());

    let card: serde_json::Value = add_response.json().await.unwrap();
    // the token is not processed, stored details are mocked
    assert_eq!(card["brand"], "Mastercard");
    assert_eq!(card["last_four"], "1234");
    assert_eq!(card["is_default"], true);

    let cards: Vec<serde_json::Value> = client
        .get(&format!("{}/api/v1/member/cards", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], card["id"]);
}

#[tokio::test]
async fn deleting_a_card_returns_204_then_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_member(&test_app.db_pool, "maria@example.com", "senha123").await;

    let card: serde_json::Value = client
        .post(&format!("{}/api/v1/member/cards", &test_app.address))
        .json(&json!({ "card_token": "tok_abc123" }))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let card_id = card["id"].as_str().unwrap();

    let delete_response = client
        .delete(&format!(
            "{}/api/v1/member/cards/{}",
            &test_app.address, card_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(delete_response.status().as_u16(), 204);

    let second_delete = client
        .delete(&format!(
            "{}/api/v1/member/cards/{}",
            &test_app.address, card_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(second_delete.status().as_u16(), 404);
}
