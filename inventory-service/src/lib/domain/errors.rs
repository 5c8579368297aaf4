use thiserror::Error;

/// Failure to hand a notification to the message sink.
///
/// Callers on the inventory path log these and carry on.
#[derive(Debug, Clone, Error)]
pub enum EventPublisherError {
    #[error("Failed to serialize event: {0}")]
    SerializationFailed(String),

    #[error("Failed to publish event to broker: {0}")]
    PublishFailed(String),

    #[error("Event publishing timed out: {0}")]
    Timeout(String),
}
