use async_trait::async_trait;

use crate::domain::errors::EventPublisherError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::events::LowStockEvent;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;

/// Port for inventory domain service operations.
#[async_trait]
pub trait InventoryServicePort: Send + Sync + 'static {
    /// List every product, unfiltered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve a single product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError>;

    /// Create a product from validated details.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, details: ProductDetails) -> Result<Product, ProductError>;

    /// Overwrite name and quantity of an existing product.
    ///
    /// Emits a low-stock notification when the stored quantity ends up under
    /// the configured threshold. Notification failures never fail the update.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        id: ProductId,
        details: ProductDetails,
    ) -> Result<Product, ProductError>;

    /// Delete a product.
    ///
    /// # Errors
    /// * `NotFound` - Store reported zero rows affected
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Retrieve all products.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Returns
    /// Optional product (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Persist a new product; the store assigns the id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError>;

    /// Update an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Zero rows affected
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove product from storage.
    ///
    /// # Errors
    /// * `NotFound` - Zero rows affected
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: ProductId) -> Result<(), ProductError>;
}

/// Outbound sink for inventory notifications.
#[async_trait]
pub trait NotificationPublisher: Send + Sync + 'static {
    /// Publish a low-stock notification.
    ///
    /// # Errors
    /// * `SerializationFailed` - Event serialization failed
    /// * `PublishFailed` - Failed to publish to broker
    /// * `Timeout` - Publishing timed out
    async fn publish_low_stock(&self, event: &LowStockEvent) -> Result<(), EventPublisherError>;
}
