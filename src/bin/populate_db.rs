//! Ad-hoc seeding utility: pulls league and team metadata from TheSportsDB
//! and inserts competition rows. Run manually, never part of request serving.

use secrecy::ExposeSecret;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use socio_torcedor_backend::config::settings::get_config;

const API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
// TheSportsDB free-tier key
const API_KEY: &str = "123";

// Campeonato Brasileiro Série A
const DEFAULT_LEAGUE_ID: &str = "4328";

#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("request to TheSportsDB failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

async fn fetch_league(client: &reqwest::Client, league_id: &str) -> Result<Value, SeedError> {
    let response = client
        .get(format!("{}/{}/lookupleague.php", API_BASE_URL, API_KEY))
        .query(&[("id", league_id)])
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json().await?)
}

async fn fetch_team(client: &reqwest::Client, team_name: &str) -> Result<Value, SeedError> {
    let response = client
        .get(format!("{}/{}/searchteams.php", API_BASE_URL, API_KEY))
        .query(&[("t", team_name)])
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json().await?)
}

async fn seed_competition(pool: &PgPool, league: &Value) -> Result<(), SeedError> {
    let league_obj = league["leagues"]
        .get(0)
        .ok_or_else(|| SeedError::Shape("no leagues in response".into()))?;

    let name = league_obj["strLeague"]
        .as_str()
        .ok_or_else(|| SeedError::Shape("missing strLeague".into()))?;
    let country = league_obj["strCountry"].as_str().unwrap_or("");
    let description = league_obj["strDescriptionEN"].as_str();

    sqlx::query(
        r#"
        INSERT INTO competitions (name, country, description)
        VALUES ($1, $2, $3)
        ON CONFLICT (name) DO NOTHING
        "#,
    )
    .bind(name)
    .bind(country)
    .bind(description)
    .execute(pool)
    .await?;

    tracing::info!("Seeded competition '{}'", name);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), SeedError> {
    let subscriber = socio_torcedor_backend::telemetry::get_subscriber(
        "populate_db".into(),
        "info".into(),
        std::io::stdout,
    );
    socio_torcedor_backend::telemetry::init_subscriber(subscriber);

    let config = get_config().expect("Failed to read the config.");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(config.database.connection_string().expose_secret())
        .await?;

    let client = reqwest::Client::new();

    let league_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LEAGUE_ID.to_string());
    let league = fetch_league(&client, &league_id).await?;
    seed_competition(&pool, &league).await?;

    if let Some(team_name) = std::env::args().nth(2) {
        let team = fetch_team(&client, &team_name).await?;
        println!("{}", serde_json::to_string_pretty(&team).unwrap_or_default());
    }

    Ok(())
}
