use std::sync::Arc;

use dotenvy::dotenv;
use market_search::{build_server, HttpMarketClient, OrderSearchService, Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        std::io::Error::other(e)
    })?;

    log::info!("Connecting to marketplace at {}", settings.market.url);
    let market = HttpMarketClient::connect(&settings.market).map_err(|e| {
        log::error!("cannot create marketplace client: {}", e);
        std::io::Error::other(e)
    })?;
    let service = OrderSearchService::new(Arc::new(market));

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(service, &settings.host, settings.port)?.await
}
