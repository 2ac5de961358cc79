use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::ticket_handler;
use crate::models::ticket::PurchaseTicketRequest;

#[get("/tickets/sales")]
async fn list_sales(pool: web::Data<PgPool>) -> HttpResponse {
    ticket_handler::list_ticket_sales(pool).await
}

#[post("/tickets/purchase")]
async fn purchase(body: web::Json<PurchaseTicketRequest>, pool: web::Data<PgPool>) -> HttpResponse {
    ticket_handler::purchase_tickets(body, pool).await
}
