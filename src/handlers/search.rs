use std::collections::HashMap;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::search_service::OrderSearchService;
use crate::domain::row::OrderRow;
use crate::errors::AppError;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub data: Vec<OrderRow>,
}

/// GET /
///
/// Serves the search page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Search page", body = String, content_type = "text/html"),
    ),
    tag = "search"
)]
pub async fn index() -> HttpResponse {
    log::info!("handling index request");
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// GET /search/
///
/// Turns the query string into a marketplace search filter and returns the
/// matching orders as display rows. Any parse, validation or marketplace
/// failure is answered with 400 and the error message as plain text.
#[utoipa::path(
    get,
    path = "/search/",
    params(
        ("client_id" = Option<String>, Query, description = "Supplier id for asks, buyer id for bids"),
        ("pps" = String, Query, description = "Price as a decimal string"),
        ("type" = i64, Query, description = "Order type: 0 = bid, 1 = ask"),
        ("duration" = i64, Query, description = "Slot duration in seconds"),
        ("cpu" = u64, Query, description = "CPU cores"),
        ("gpu" = i64, Query, description = "GPU count class: 0 none, 1 single, 2 multiple"),
        ("ram" = u64, Query, description = "RAM in bytes"),
        ("storage" = u64, Query, description = "Storage in bytes"),
        ("net_type" = i64, Query, description = "Network type: 0 none, 1 outbound, 2 incoming"),
        ("net_in" = u64, Query, description = "Inbound traffic in bytes"),
        ("net_out" = u64, Query, description = "Outbound traffic in bytes"),
        ("count" = Option<u64>, Query, description = "Maximum number of results (default 25)"),
    ),
    responses(
        (status = 200, description = "Matching orders", body = SearchResponse),
        (status = 400, description = "Malformed query or marketplace failure", body = String, content_type = "text/plain"),
    ),
    tag = "search"
)]
pub async fn search_orders(
    service: web::Data<OrderSearchService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    log::info!("handling search request");
    let params = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map_err(|e| {
            log::warn!("cannot decode query string: {}", e);
            AppError::BadRequest(e.to_string())
        })?
        .into_inner();

    let data = service.search(&params).await.map_err(|e| {
        log::warn!("search failed: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(SearchResponse { data }))
}
