//! Subscriber repository trait

use crate::error::Result;
use crate::models::Subscriber;
use async_trait::async_trait;

/// Read access to subscriber records.
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Every subscriber, in storage order
    async fn list(&self) -> Result<Vec<Subscriber>>;
}
