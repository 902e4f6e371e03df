pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::search_service::OrderSearchService;
pub use config::Settings;
pub use infrastructure::market_client::HttpMarketClient;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::search::index, handlers::search::search_orders),
    components(schemas(handlers::search::SearchResponse, domain::row::OrderRow)),
    tags((name = "search", description = "Marketplace order search"))
)]
pub struct ApiDoc;

/// Route table shared by the server and the handler tests.
pub fn build_app(service: OrderSearchService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(service))
            .route("/", web::get().to(handlers::search::index))
            .route("/search/", web::get().to(handlers::search::search_orders))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or spawning) the returned
/// server.
pub fn build_server(
    service: OrderSearchService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(build_app(service.clone()))
    })
    .bind((host.to_string(), port))?
    .run())
}
