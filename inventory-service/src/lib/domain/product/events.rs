use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;

/// Notification fired when an update leaves a product below the low-stock threshold.
///
/// Emitted, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockEvent {
    pub event_id: String,
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub threshold: i32,
    pub occurred_at: DateTime<Utc>,
}

impl LowStockEvent {
    /// Snapshot a product that has just dropped under `threshold`.
    pub fn new(product: &Product, threshold: i32) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            product_id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            threshold,
            occurred_at: Utc::now(),
        }
    }
}
