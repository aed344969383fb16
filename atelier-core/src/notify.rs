use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub message_id: Uuid,
    pub accepted_at: DateTime<Utc>,
}

/// Notification-sender capability. The transactional-email provider lives
/// behind this interface; the engine never talks to it directly.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> CoreResult<DeliveryReceipt>;
}

/// In-process sender that accepts everything and keeps an inspectable
/// outbox. Used in tests and anywhere delivery is out of scope.
pub struct MockNotificationSender {
    outbox: Mutex<Vec<EmailMessage>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Messages accepted so far, oldest first
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, message: &EmailMessage) -> CoreResult<DeliveryReceipt> {
        if message.to.trim().is_empty() {
            return Err(CoreError::DeliveryError(
                "message has no recipient".to_string(),
            ));
        }

        tracing::info!("Accepting outbound email to {}", message.to);
        self.outbox
            .lock()
            .map_err(|_| CoreError::InternalError("outbox poisoned".to_string()))?
            .push(message.clone());

        Ok(DeliveryReceipt {
            message_id: Uuid::new_v4(),
            accepted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(to: &str) -> EmailMessage {
        EmailMessage {
            to: to.to_string(),
            from: "no-reply@atelier.studio".to_string(),
            subject: "Hello".to_string(),
            body: "Body".to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_messages_land_in_the_outbox() {
        let sender = MockNotificationSender::new();
        sender.send(&message("hello@atelier.studio")).await.unwrap();
        sender.send(&message("second@atelier.studio")).await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "hello@atelier.studio");
    }

    #[tokio::test]
    async fn missing_recipient_is_a_delivery_error() {
        let sender = MockNotificationSender::new();
        let result = sender.send(&message("  ")).await;
        assert!(matches!(result, Err(CoreError::DeliveryError(_))));
        assert!(sender.sent().is_empty());
    }
}
