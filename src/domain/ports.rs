use futures::future::BoxFuture;

use super::errors::DomainError;
use super::order::Order;

pub trait MarketClient: Send + Sync + 'static {
    /// Return up to `count` orders matching `filter`.
    fn get_orders<'a>(
        &'a self,
        filter: &'a Order,
        count: u64,
    ) -> BoxFuture<'a, Result<Vec<Order>, DomainError>>;
}
