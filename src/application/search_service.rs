use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::MarketClient;
use crate::domain::query::SearchQuery;
use crate::domain::row::OrderRow;

/// Process-wide search context: built once at startup and shared by every
/// request handler.
#[derive(Clone)]
pub struct OrderSearchService {
    market: Arc<dyn MarketClient>,
}

impl OrderSearchService {
    pub fn new(market: Arc<dyn MarketClient>) -> Self {
        Self { market }
    }

    /// Parse the query string, ask the marketplace for matching orders and
    /// project them into table rows.
    pub async fn search(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<Vec<OrderRow>, DomainError> {
        let query = SearchQuery::parse(params)?;
        let filter = query.to_filter()?;

        log::debug!(
            "searching {} orders for {} (count {})",
            filter.order_type,
            filter.counterparty_id(),
            query.count
        );
        let orders = self.market.get_orders(&filter, query.count).await?;

        Ok(orders.iter().map(OrderRow::from).collect())
    }
}
