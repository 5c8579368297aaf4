use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;
use serde::Serialize;
use thiserror::Error;

use crate::config::KafkaConfig;
use crate::domain::errors::EventPublisherError;
use crate::domain::product::events::LowStockEvent;
use crate::domain::product::ports::NotificationPublisher;
use crate::outbound::events::messages::InventoryEventMessage;

#[derive(Debug, Error)]
pub enum KafkaProducerError {
    #[error("Failed to send message to Kafka: {0}")]
    SendError(String),

    #[error("Failed to serialize message: {0}")]
    SerializationError(String),

    #[error("Timed out waiting for Kafka acknowledgement: {0}")]
    Timeout(String),
}

impl From<KafkaProducerError> for EventPublisherError {
    fn from(err: KafkaProducerError) -> Self {
        match err {
            KafkaProducerError::SerializationError(msg) => {
                EventPublisherError::SerializationFailed(msg)
            }
            KafkaProducerError::SendError(msg) => EventPublisherError::PublishFailed(msg),
            KafkaProducerError::Timeout(msg) => EventPublisherError::Timeout(msg),
        }
    }
}

pub struct KafkaEventProducer {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaEventProducer {
    /// Create a new Kafka producer for inventory notifications.
    ///
    /// # Notes:
    /// - `acks=all`: Wait for all in-sync replicas to acknowledge
    /// - `enable.idempotence=true`: Prevents duplicate messages during retries
    /// - `retry.backoff.ms=100`: Backoff between retry attempts
    ///
    /// Retries live here; callers publish once and move on.
    pub fn new(config: &KafkaConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Initializing Kafka producer for inventory notifications"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "30000")
            .set("queue.buffering.max.messages", "10000")
            .set("batch.num.messages", "100")
            .set("compression.type", "gzip")
            .set("enable.idempotence", "true")
            .set("acks", "all")
            .set("retries", "10")
            .set("max.in.flight.requests.per.connection", "5")
            .set("retry.backoff.ms", "100")
            .create()?;

        tracing::info!("Kafka producer initialized successfully");

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Serialize and send one message, partitioned by `key`.
    async fn publish<T: Serialize>(&self, key: &str, message: &T) -> Result<(), KafkaProducerError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| KafkaProducerError::SerializationError(e.to_string()))?;

        let record = FutureRecord::to(&self.topic).key(key).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(topic = %self.topic, key, "Event published");
            })
            .map_err(|(err, _)| match err {
                rdkafka::error::KafkaError::MessageProduction(
                    rdkafka::types::RDKafkaErrorCode::MessageTimedOut,
                ) => KafkaProducerError::Timeout(err.to_string()),
                _ => KafkaProducerError::SendError(err.to_string()),
            })
    }
}

#[async_trait]
impl NotificationPublisher for KafkaEventProducer {
    async fn publish_low_stock(&self, event: &LowStockEvent) -> Result<(), EventPublisherError> {
        let message = InventoryEventMessage::from(event);
        let key = event.product_id.to_string();

        self.publish(&key, &message).await.map_err(|e| {
            tracing::warn!(
                product_id = %event.product_id,
                error = %e,
                "Kafka rejected low-stock notification"
            );
            e.into()
        })
    }
}
