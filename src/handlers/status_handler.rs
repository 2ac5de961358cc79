use actix_web::HttpResponse;
use serde_json::json;
use sqlx::PgPool;

pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Bem-vindo à API de Sócio Torcedor! Módulo Esportivo Operante."
    }))
}

/// Liveness probe. Query failures are reported in the payload, not as an
/// HTTP error.
#[tracing::instrument(name = "Database connectivity probe", skip(pool))]
pub async fn get_status(pool: &PgPool) -> HttpResponse {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(1) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "connected"
        })),
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "error",
            "database": "not connected"
        })),
        Err(e) => {
            tracing::error!("Database probe failed: {}", e);
            HttpResponse::Ok().json(json!({
                "status": "error",
                "database": format!("connection failed: {}", e)
            }))
        }
    }
}
