use sqlx::PgPool;

use crate::models::partner::{Partner, PartnerSummary};

pub async fn list_partners(pool: &PgPool) -> Result<Vec<PartnerSummary>, sqlx::Error> {
    let partners = sqlx::query_as::<_, PartnerSummary>(
        r#"
        SELECT id, name, category, logo_url, discount
        FROM partners
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(partners)
}

pub async fn list_featured_partners(pool: &PgPool) -> Result<Vec<PartnerSummary>, sqlx::Error> {
    let partners = sqlx::query_as::<_, PartnerSummary>(
        r#"
        SELECT id, name, category, logo_url, discount
        FROM partners
        WHERE is_featured = TRUE
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(partners)
}

pub async fn get_partner(pool: &PgPool, partner_id: &str) -> Result<Option<Partner>, sqlx::Error> {
    let partner = sqlx::query_as::<_, Partner>(
        r#"
        SELECT id, name, category, logo_url, discount, is_featured,
               description, how_to_use
        FROM partners
        WHERE id = $1
        "#,
    )
    .bind(partner_id)
    .fetch_optional(pool)
    .await?;

    Ok(partner)
}
