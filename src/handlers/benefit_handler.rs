use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::partners;
use crate::models::common::ApiResponse;
use crate::models::partner::{BenefitsResponse, PartnerDetailResponse};

#[tracing::instrument(name = "List benefits", skip(pool))]
pub async fn list_benefits(pool: web::Data<PgPool>) -> HttpResponse {
    let featured = match partners::list_featured_partners(&pool).await {
        Ok(featured) => featured,
        Err(e) => {
            tracing::error!("Failed to fetch featured partners: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch benefits"));
        }
    };

    let all_partners = match partners::list_partners(&pool).await {
        Ok(all_partners) => all_partners,
        Err(e) => {
            tracing::error!("Failed to fetch partners: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch benefits"));
        }
    };

    HttpResponse::Ok().json(BenefitsResponse {
        featured,
        partners: all_partners,
    })
}

#[tracing::instrument(name = "Get benefit detail", skip(pool))]
pub async fn get_benefit_detail(partner_id: String, pool: web::Data<PgPool>) -> HttpResponse {
    match partners::get_partner(&pool, &partner_id).await {
        Ok(Some(partner)) => HttpResponse::Ok().json(PartnerDetailResponse {
            how_to_use: parse_how_to_use(&partner.how_to_use),
            id: partner.id,
            name: partner.name,
            category: partner.category,
            logo_url: partner.logo_url,
            discount: partner.discount,
            is_featured: partner.is_featured,
            description: partner.description,
        }),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Partner not found")),
        Err(e) => {
            tracing::error!("Failed to fetch partner: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Failed to fetch partner"))
        }
    }
}

/// Decode the JSON-encoded `how_to_use` column into a list of steps. A
/// non-list value becomes a single-element list.
fn parse_how_to_use(raw: &str) -> Vec<String> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(step) => step,
                other => other.to_string(),
            })
            .collect(),
        Ok(serde_json::Value::String(step)) => vec![step],
        Ok(other) => vec![other.to_string()],
        Err(_) => vec![raw.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::parse_how_to_use;

    #[test]
    fn decodes_a_json_list_of_steps() {
        let steps = parse_how_to_use(r#"["Show your card", "Ask for the discount"]"#);
        assert_eq!(steps, vec!["Show your card", "Ask for the discount"]);
    }

    #[test]
    fn normalizes_a_plain_json_string_into_one_step() {
        let steps = parse_how_to_use(r#""Show your membership card""#);
        assert_eq!(steps, vec!["Show your membership card"]);
    }

    #[test]
    fn falls_back_to_the_raw_text_when_not_json() {
        let steps = parse_how_to_use("just show up");
        assert_eq!(steps, vec!["just show up"]);
    }
}
