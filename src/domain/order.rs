use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ── Enums ────────────────────────────────────────────────────────────────────

/// Direction of an order: a bid asks for resources, an ask offers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Bid,
    Ask,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Bid => "BID",
            OrderType::Ask => "ASK",
        }
    }
}

impl TryFrom<i64> for OrderType {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderType::Bid),
            1 => Ok(OrderType::Ask),
            other => Err(DomainError::Validation(format!(
                "unknown order type {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GpuCount {
    NoGpu,
    SingleGpu,
    MultipleGpu,
}

impl GpuCount {
    pub fn as_str(&self) -> &'static str {
        match self {
            GpuCount::NoGpu => "NO_GPU",
            GpuCount::SingleGpu => "SINGLE_GPU",
            GpuCount::MultipleGpu => "MULTIPLE_GPU",
        }
    }
}

impl TryFrom<i64> for GpuCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GpuCount::NoGpu),
            1 => Ok(GpuCount::SingleGpu),
            2 => Ok(GpuCount::MultipleGpu),
            other => Err(DomainError::Validation(format!(
                "unknown gpu count {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkType {
    NoNetwork,
    Outbound,
    Incoming,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::NoNetwork => "NO_NETWORK",
            NetworkType::Outbound => "OUTBOUND",
            NetworkType::Incoming => "INCOMING",
        }
    }
}

impl TryFrom<i64> for NetworkType {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NetworkType::NoNetwork),
            1 => Ok(NetworkType::Outbound),
            2 => Ok(NetworkType::Incoming),
            other => Err(DomainError::Validation(format!(
                "unknown network type {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GpuCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Order ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub cpu_cores: u64,
    pub ram_bytes: u64,
    pub gpu_count: GpuCount,
    pub storage: u64,
    pub network_type: NetworkType,
    pub net_traffic_in: u64,
    pub net_traffic_out: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Seconds.
    pub duration: u64,
    pub resources: Resources,
}

/// A marketplace order.
///
/// The same shape is used for the outbound search filter and for the records
/// the marketplace returns. Exactly one of `supplier_id` / `buyer_id` is
/// meaningful, selected by `order_type`; use [`Order::counterparty_id`] and
/// [`Order::set_counterparty_id`] instead of touching the fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub order_type: OrderType,
    pub price: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub supplier_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub buyer_id: String,
    pub slot: Slot,
}

impl Order {
    pub fn new(order_type: OrderType, price: String, slot: Slot) -> Self {
        Self {
            id: String::new(),
            order_type,
            price,
            supplier_id: String::new(),
            buyer_id: String::new(),
            slot,
        }
    }

    /// Identifier of the party that placed the order: the supplier for an
    /// ask, the buyer for a bid.
    pub fn counterparty_id(&self) -> &str {
        match self.order_type {
            OrderType::Ask => &self.supplier_id,
            OrderType::Bid => &self.buyer_id,
        }
    }

    pub fn set_counterparty_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        match self.order_type {
            OrderType::Ask => {
                self.supplier_id = id;
                self.buyer_id.clear();
            }
            OrderType::Bid => {
                self.buyer_id = id;
                self.supplier_id.clear();
            }
        }
    }

    /// Structural check mirroring what the marketplace enforces before it
    /// accepts an order.
    pub fn validate(&self) -> Result<(), DomainError> {
        let price = BigDecimal::from_str(&self.price).map_err(|e| {
            DomainError::Validation(format!("invalid price '{}': {}", self.price, e))
        })?;
        if price < BigDecimal::from(0) {
            return Err(DomainError::Validation(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }

        let (own, other, own_name, other_name) = match self.order_type {
            OrderType::Ask => (&self.supplier_id, &self.buyer_id, "supplier", "buyer"),
            OrderType::Bid => (&self.buyer_id, &self.supplier_id, "buyer", "supplier"),
        };
        if own.is_empty() {
            return Err(DomainError::Validation(format!(
                "{} id is required for {} orders",
                own_name, self.order_type
            )));
        }
        if !other.is_empty() {
            return Err(DomainError::Validation(format!(
                "{} id must be empty for {} orders",
                other_name, self.order_type
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> Slot {
        Slot {
            duration: 3600,
            resources: Resources {
                cpu_cores: 4,
                ram_bytes: 1 << 30,
                gpu_count: GpuCount::SingleGpu,
                storage: 0,
                network_type: NetworkType::NoNetwork,
                net_traffic_in: 0,
                net_traffic_out: 0,
            },
        }
    }

    #[test]
    fn order_type_from_int() {
        assert_eq!(OrderType::try_from(0).unwrap(), OrderType::Bid);
        assert_eq!(OrderType::try_from(1).unwrap(), OrderType::Ask);
        assert!(matches!(
            OrderType::try_from(2),
            Err(DomainError::Validation(_))
        ));
        assert!(OrderType::try_from(-1).is_err());
    }

    #[test]
    fn gpu_and_network_reject_out_of_range() {
        assert_eq!(GpuCount::try_from(2).unwrap(), GpuCount::MultipleGpu);
        assert!(GpuCount::try_from(3).is_err());
        assert!(GpuCount::try_from(-1).is_err());
        assert_eq!(NetworkType::try_from(2).unwrap(), NetworkType::Incoming);
        assert!(NetworkType::try_from(3).is_err());
    }

    #[test]
    fn enum_names() {
        assert_eq!(OrderType::Ask.to_string(), "ASK");
        assert_eq!(GpuCount::NoGpu.to_string(), "NO_GPU");
        assert_eq!(NetworkType::Outbound.to_string(), "OUTBOUND");
    }

    #[test]
    fn ask_counterparty_is_supplier() {
        let mut order = Order::new(OrderType::Ask, "10".to_string(), slot());
        order.set_counterparty_id("abc");
        assert_eq!(order.supplier_id, "abc");
        assert!(order.buyer_id.is_empty());
        assert_eq!(order.counterparty_id(), "abc");
    }

    #[test]
    fn bid_counterparty_is_buyer() {
        let mut order = Order::new(OrderType::Bid, "10".to_string(), slot());
        order.supplier_id = "stale".to_string();
        order.set_counterparty_id("abc");
        assert_eq!(order.buyer_id, "abc");
        assert!(order.supplier_id.is_empty());
        assert_eq!(order.counterparty_id(), "abc");
    }

    #[test]
    fn validate_accepts_well_formed_order() {
        let mut order = Order::new(OrderType::Ask, "0.5".to_string(), slot());
        order.set_counterparty_id("abc");
        assert!(order.validate().is_ok());
    }

    #[test]
    fn validate_requires_counterparty() {
        let order = Order::new(OrderType::Bid, "1".to_string(), slot());
        let err = order.validate().unwrap_err();
        assert!(err.to_string().contains("buyer id is required"));
    }

    #[test]
    fn validate_rejects_both_identifiers() {
        let mut order = Order::new(OrderType::Ask, "1".to_string(), slot());
        order.supplier_id = "a".to_string();
        order.buyer_id = "b".to_string();
        let err = order.validate().unwrap_err();
        assert!(err.to_string().contains("buyer id must be empty"));
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut order = Order::new(OrderType::Ask, "-3".to_string(), slot());
        order.set_counterparty_id("abc");
        assert!(matches!(order.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn wire_shape_uses_enum_names_and_skips_empty_ids() {
        let mut order = Order::new(OrderType::Ask, "10".to_string(), slot());
        order.set_counterparty_id("abc");
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_type"], "ASK");
        assert_eq!(json["supplier_id"], "abc");
        assert!(json.get("buyer_id").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["slot"]["resources"]["gpu_count"], "SINGLE_GPU");
    }
}
