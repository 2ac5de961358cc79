use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::{matches, tickets};
use crate::handlers::CURRENT_USER_ID;
use crate::models::common::ApiResponse;
use crate::models::ticket::{
    order_status, Order, PurchaseTicketRequest, TicketCategoryResponse, TicketSaleMatch,
};

#[tracing::instrument(name = "List ticket sales", skip(pool))]
pub async fn list_ticket_sales(pool: web::Data<PgPool>) -> HttpResponse {
    let sale_matches = match matches::list_sale_matches(&pool).await {
        Ok(sale_matches) => sale_matches,
        Err(e) => {
            tracing::error!("Failed to fetch sale matches: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch ticket sales"));
        }
    };

    let mut listings = Vec::with_capacity(sale_matches.len());
    for sale_match in sale_matches {
        let categories = match tickets::list_categories_for_match(&pool, sale_match.id).await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::error!("Failed to fetch ticket categories: {}", e);
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to fetch ticket sales"));
            }
        };

        listings.push(TicketSaleMatch {
            id: sale_match.id,
            status: sale_match.status,
            location: sale_match.location,
            home_team: sale_match.home_team,
            away_team: sale_match.away_team,
            match_datetime: sale_match.match_datetime,
            categories: categories.into_iter().map(TicketCategoryResponse::from).collect(),
        });
    }

    HttpResponse::Ok().json(listings)
}

/// Payment always succeeds; there is no gateway behind this yet.
#[tracing::instrument(
    name = "Purchase tickets",
    skip(body, pool),
    fields(match_id = %body.match_id, quantity = %body.quantity)
)]
pub async fn purchase_tickets(
    body: web::Json<PurchaseTicketRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match matches::get_match(&pool, body.match_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch match: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to purchase tickets"));
        }
    }

    let category = match tickets::get_category(&pool, &body.ticket_category_id).await {
        Ok(Some(category)) if category.match_id == body.match_id => category,
        Ok(_) => {
            return HttpResponse::NotFound()
                .json(ApiResponse::<()>::error("Ticket category not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch ticket category: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to purchase tickets"));
        }
    };

    if category.available_quantity < body.quantity {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Not enough tickets available"));
    }

    if let Err(e) =
        tickets::decrement_available_quantity(&pool, &category.id, body.quantity).await
    {
        tracing::error!("Failed to decrement ticket inventory: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to purchase tickets"));
    }

    let ordered_at = Utc::now();
    let order_id = format!("ORD-{}-{}", ordered_at.timestamp_millis(), CURRENT_USER_ID);
    let order = Order {
        qr_code_url: format!(
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
            order_id
        ),
        id: order_id,
        user_id: CURRENT_USER_ID,
        match_id: body.match_id,
        ticket_category_id: category.id,
        quantity: body.quantity,
        payment_method: body.payment_method.clone(),
        card_id: body.card_id.clone(),
        status: order_status::CONFIRMED.to_string(),
        ordered_at,
    };

    match tickets::insert_order(&pool, &order).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(e) => {
            tracing::error!("Failed to insert order: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to purchase tickets"))
        }
    }
}
