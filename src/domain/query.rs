use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::errors::DomainError;
use super::order::{GpuCount, NetworkType, Order, OrderType, Resources, Slot};

pub const DEFAULT_COUNT: u64 = 25;

/// Typed view of the `/search/` query string.
///
/// Enum-valued fields stay as raw integers here; range checks happen when the
/// query is turned into an [`Order`] so they surface as validation errors.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub client_id: String,
    pub price: BigDecimal,
    pub order_type: i64,
    pub duration: i64,
    pub cpu: u64,
    pub gpu: i64,
    pub ram: u64,
    pub storage: u64,
    pub net_type: i64,
    pub net_in: u64,
    pub net_out: u64,
    pub count: u64,
}

fn required<T>(params: &HashMap<String, String>, field: &'static str) -> Result<T, DomainError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = params
        .get(field)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::parse(field, "value is missing"))?;
    raw.parse::<T>().map_err(|e| DomainError::parse(field, e))
}

impl SearchQuery {
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, DomainError> {
        Ok(Self {
            client_id: params.get("client_id").cloned().unwrap_or_default(),
            price: required(params, "pps")?,
            order_type: required(params, "type")?,
            duration: required(params, "duration")?,
            cpu: required(params, "cpu")?,
            gpu: required(params, "gpu")?,
            ram: required(params, "ram")?,
            storage: required(params, "storage")?,
            net_type: required(params, "net_type")?,
            net_in: required(params, "net_in")?,
            net_out: required(params, "net_out")?,
            count: params
                .get("count")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_COUNT),
        })
    }

    /// Assemble the search filter sent to the marketplace.
    ///
    /// `client_id` lands in the supplier slot for asks and in the buyer slot
    /// for bids. The result has passed [`Order::validate`].
    pub fn to_filter(&self) -> Result<Order, DomainError> {
        let order_type = OrderType::try_from(self.order_type)?;
        let duration = u64::try_from(self.duration).map_err(|_| {
            DomainError::Validation(format!(
                "duration must not be negative, got {}",
                self.duration
            ))
        })?;

        let slot = Slot {
            duration,
            resources: Resources {
                cpu_cores: self.cpu,
                ram_bytes: self.ram,
                gpu_count: GpuCount::try_from(self.gpu)?,
                storage: self.storage,
                network_type: NetworkType::try_from(self.net_type)?,
                net_traffic_in: self.net_in,
                net_traffic_out: self.net_out,
            },
        };

        let mut order = Order::new(order_type, self.price.to_string(), slot);
        order.set_counterparty_id(self.client_id.as_str());
        order.validate()?;

        Ok(order)
    }
}
