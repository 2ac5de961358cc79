use std::net::TcpListener;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use socio_torcedor_backend::config::settings::get_config;
use socio_torcedor_backend::run;
use socio_torcedor_backend::telemetry::{get_subscriber, init_subscriber};

const MAX_DB_CONNECT_ATTEMPTS: u32 = 10;
const DB_CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "socio-torcedor-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // The database may still be starting (compose brings both up together),
    // wait for it with a bounded retry loop.
    let mut connection_pool: Option<PgPool> = None;
    for attempt in 1..=MAX_DB_CONNECT_ATTEMPTS {
        match PgPoolOptions::new()
            .max_connections(32)
            .acquire_timeout(Duration::from_secs(10))
            .connect(config.database.connection_string().expose_secret())
            .await
        {
            Ok(pool) => {
                tracing::info!("Database connection established");
                connection_pool = Some(pool);
                break;
            }
            Err(e) => {
                tracing::warn!(
                    "Database not ready ({}), attempt {}/{}",
                    e,
                    attempt,
                    MAX_DB_CONNECT_ATTEMPTS
                );
                if attempt < MAX_DB_CONNECT_ATTEMPTS {
                    tokio::time::sleep(DB_CONNECT_RETRY_DELAY).await;
                }
            }
        }
    }

    let connection_pool = match connection_pool {
        Some(pool) => pool,
        None => {
            tracing::error!(
                "Could not connect to the database after {} attempts",
                MAX_DB_CONNECT_ATTEMPTS
            );
            std::process::exit(1);
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;

    run(listener, connection_pool)?.await
}
