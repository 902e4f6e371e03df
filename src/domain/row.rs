use serde::Serialize;
use utoipa::ToSchema;

use super::order::Order;
use super::units::{format_bytes, format_duration};

/// One line of the search results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderRow {
    pub id: String,
    pub client_id: String,
    pub order_type: String,
    pub price: String,
    pub duration: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub storage: String,
    pub net_type: String,
    pub net_in: String,
    pub net_out: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        let resources = &order.slot.resources;
        Self {
            id: order.id.clone(),
            client_id: order.counterparty_id().to_string(),
            order_type: order.order_type.to_string(),
            price: order.price.clone(),
            duration: format_duration(order.slot.duration),
            cpu: resources.cpu_cores.to_string(),
            gpu: resources.gpu_count.to_string(),
            ram: format_bytes(resources.ram_bytes),
            storage: format_bytes(resources.storage),
            net_type: resources.network_type.to_string(),
            net_in: format_bytes(resources.net_traffic_in),
            net_out: format_bytes(resources.net_traffic_out),
        }
    }
}
