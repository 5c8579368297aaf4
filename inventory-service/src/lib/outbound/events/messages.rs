use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::product::events::LowStockEvent;

/// Serializable envelope for inventory notifications.
///
/// Infrastructure representation for event publishing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum InventoryEventMessage {
    LowStock(LowStockMessage),
}

/// Serializable message for the LowStock domain event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LowStockMessage {
    pub event_id: String,
    pub product_id: i64,
    pub name: String,
    pub quantity: i32,
    pub threshold: i32,
    pub occurred_at: DateTime<Utc>,
}

impl From<&LowStockEvent> for LowStockMessage {
    fn from(event: &LowStockEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            product_id: event.product_id.0,
            name: event.name.clone(),
            quantity: event.quantity,
            threshold: event.threshold,
            occurred_at: event.occurred_at,
        }
    }
}

impl From<&LowStockEvent> for InventoryEventMessage {
    fn from(event: &LowStockEvent) -> Self {
        InventoryEventMessage::LowStock(LowStockMessage::from(event))
    }
}
