use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::events::LowStockEvent;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::InventoryServicePort;
use crate::domain::product::ports::NotificationPublisher;
use crate::domain::product::ports::ProductRepository;

/// Domain service implementation for inventory operations.
pub struct InventoryService<PR, NP>
where
    PR: ProductRepository,
    NP: NotificationPublisher,
{
    repository: Arc<PR>,
    notification_publisher: Arc<NP>,
    low_stock_threshold: i32,
    notification_timeout: Duration,
}

impl<PR, NP> InventoryService<PR, NP>
where
    PR: ProductRepository,
    NP: NotificationPublisher,
{
    /// Create a new inventory service.
    ///
    /// # Arguments
    /// * `repository` - Product persistence implementation
    /// * `notification_publisher` - Low-stock notification sink
    /// * `low_stock_threshold` - Updates leaving quantity strictly below this emit a notification
    /// * `notification_timeout` - Longest an update waits on the notification sink
    pub fn new(
        repository: Arc<PR>,
        notification_publisher: Arc<NP>,
        low_stock_threshold: i32,
        notification_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            notification_publisher,
            low_stock_threshold,
            notification_timeout,
        }
    }

    async fn notify_if_low_stock(&self, product: &Product) {
        if product.quantity >= self.low_stock_threshold {
            return;
        }

        let event = LowStockEvent::new(product, self.low_stock_threshold);
        let publish = self.notification_publisher.publish_low_stock(&event);

        match tokio::time::timeout(self.notification_timeout, publish).await {
            Ok(Ok(())) => tracing::debug!(
                product_id = %product.id,
                quantity = product.quantity,
                threshold = self.low_stock_threshold,
                "Low-stock notification published"
            ),
            Ok(Err(e)) => tracing::error!(
                product_id = %product.id,
                event_id = %event.event_id,
                error = %e,
                "Failed to publish low-stock notification"
            ),
            Err(_) => tracing::error!(
                product_id = %product.id,
                event_id = %event.event_id,
                timeout_ms = self.notification_timeout.as_millis(),
                "Low-stock notification timed out"
            ),
        }
    }
}

#[async_trait]
impl<PR, NP> InventoryServicePort for InventoryService<PR, NP>
where
    PR: ProductRepository,
    NP: NotificationPublisher,
{
    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    async fn create_product(&self, details: ProductDetails) -> Result<Product, ProductError> {
        let product = self.repository.create(NewProduct::from(details)).await?;

        tracing::info!(product_id = %product.id, quantity = product.quantity, "Product created");

        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        details: ProductDetails,
    ) -> Result<Product, ProductError> {
        let product = self
            .repository
            .update(Product::from_details(id, details))
            .await?;

        tracing::info!(product_id = %product.id, quantity = product.quantity, "Product updated");

        self.notify_if_low_stock(&product).await;

        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                tracing::info!(product_id = %id, "Product deleted");
                Ok(())
            }
            Err(ProductError::NotFound(_)) => {
                tracing::warn!(product_id = %id, "Delete affected no rows");
                Err(ProductError::NotFound(id))
            }
            Err(e) => {
                tracing::error!(product_id = %id, error = %e, "Delete failed");
                Err(e)
            }
        }
    }
}
