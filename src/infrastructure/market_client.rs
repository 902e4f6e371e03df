use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::config::MarketSettings;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::MarketClient;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Upstream(e.to_string())
    }
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GetOrdersRequest<'a> {
    order: &'a Order,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct GetOrdersReply {
    #[serde(default)]
    orders: Vec<Order>,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Marketplace client speaking JSON over (mutually authenticated) HTTPS.
pub struct HttpMarketClient {
    http: reqwest::Client,
    search_url: String,
}

impl HttpMarketClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            search_url: format!("{}/orders/search", base_url.trim_end_matches('/')),
        }
    }

    /// Build the client with the TLS identity and trust roots from `settings`.
    pub fn connect(settings: &MarketSettings) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(pem) = &settings.identity_pem {
            builder = builder.identity(reqwest::Identity::from_pem(pem)?);
        }
        if let Some(pem) = &settings.ca_pem {
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(pem)?);
        }

        Ok(Self::new(builder.build()?, &settings.url))
    }

    async fn fetch(&self, filter: &Order, count: u64) -> Result<Vec<Order>, DomainError> {
        let resp = self
            .http
            .post(&self.search_url)
            .json(&GetOrdersRequest {
                order: filter,
                count,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Upstream(format!(
                "marketplace replied {}: {}",
                status,
                body.trim()
            )));
        }

        let reply: GetOrdersReply = resp.json().await?;
        Ok(reply.orders)
    }
}

impl MarketClient for HttpMarketClient {
    fn get_orders<'a>(
        &'a self,
        filter: &'a Order,
        count: u64,
    ) -> BoxFuture<'a, Result<Vec<Order>, DomainError>> {
        self.fetch(filter, count).boxed()
    }
}
