use async_trait::async_trait;
use model::lead::object_key::LeadObjectKey;
use model::lead::LeadNotification;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod lead_events_repository_impl;

#[derive(Debug, thiserror::Error)]
pub enum LeadEventsRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

/// Durable store for received lead notifications. Writes are last-write-wins
/// per object key.
#[async_trait]
pub trait LeadEventsRepository {
    async fn store_notification(
        &self,
        object_key: &LeadObjectKey,
        notification: &LeadNotification,
    ) -> Result<(), LeadEventsRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub LeadEventsRepository {}
    #[async_trait]
    impl LeadEventsRepository for LeadEventsRepository {
        async fn store_notification(
            &self,
            object_key: &LeadObjectKey,
            notification: &LeadNotification,
        ) -> Result<(), LeadEventsRepositoryError>;
    }
}
