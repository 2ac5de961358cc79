use reqwest::Client;

mod common;
use common::fixtures::seed_partner;
use common::utils::spawn_app;

#[tokio::test]
async fn listing_separates_featured_from_all_partners() {
    let test_app = spawn_app().await;
    let client = Client::new();

    seed_partner(
        &test_app.db_pool,
        "Churrascaria do Tubarão",
        true,
        r#"["Apresente a carteirinha"]"#,
    )
    .await;
    seed_partner(
        &test_app.db_pool,
        "Academia Barra Forte",
        false,
        r#"["Agende pelo app"]"#,
    )
    .await;

    let response = client
        .get(&format!("{}/api/v1/benefits", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let benefits: serde_json::Value = response.json().await.unwrap();
    assert_eq!(benefits["featured"].as_array().unwrap().len(), 1);
    assert_eq!(benefits["featured"][0]["name"], "Churrascaria do Tubarão");
    assert_eq!(benefits["partners"].as_array().unwrap().len(), 2);
    // summaries stay flat
    assert!(benefits["partners"][0].get("how_to_use").is_none());
}

#[tokio::test]
async fn detail_decodes_how_to_use_into_steps() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let partner_id = seed_partner(
        &test_app.db_pool,
        "Churrascaria do Tubarão",
        true,
        r#"["Apresente a carteirinha", "Peça o desconto no caixa"]"#,
    )
    .await;

    let response = client
        .get(&format!(
            "{}/api/v1/benefits/{}",
            &test_app.address, partner_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let detail: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        detail["how_to_use"],
        serde_json::json!(["Apresente a carteirinha", "Peça o desconto no caixa"])
    );
}

#[tokio::test]
async fn detail_normalizes_a_non_list_value_into_one_step() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let partner_id = seed_partner(
        &test_app.db_pool,
        "Academia Barra Forte",
        false,
        r#""Agende pelo app""#,
    )
    .await;

    let response = client
        .get(&format!(
            "{}/api/v1/benefits/{}",
            &test_app.address, partner_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let detail: serde_json::Value = response.json().await.unwrap();
    assert_eq!(detail["how_to_use"], serde_json::json!(["Agende pelo app"]));
}

#[tokio::test]
async fn missing_partner_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(&format!(
            "{}/api/v1/benefits/partner_nao_existe",
            &test_app.address
        ))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
}
