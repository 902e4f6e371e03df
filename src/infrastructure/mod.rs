pub mod market_client;
