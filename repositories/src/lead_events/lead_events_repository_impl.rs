use anyhow::anyhow;
use async_trait::async_trait;
use rusoto_s3::{PutObjectRequest, S3};

use model::lead::object_key::LeadObjectKey;
use model::lead::LeadNotification;

use crate::lead_events::{LeadEventsRepository, LeadEventsRepositoryError};

const JSON_CONTENT_TYPE: &str = "application/json";

pub struct LeadEventsRepositoryImpl<T: S3 + Sync + Send> {
    bucket_name: String,
    s3_client: T,
}

impl<T: S3 + Sync + Send> LeadEventsRepositoryImpl<T> {
    pub fn new(bucket_name: String, s3_client: T) -> Self {
        Self {
            bucket_name,
            s3_client,
        }
    }
}

#[async_trait]
impl<T: S3 + Sync + Send> LeadEventsRepository for LeadEventsRepositoryImpl<T> {
    async fn store_notification(
        &self,
        object_key: &LeadObjectKey,
        notification: &LeadNotification,
    ) -> Result<(), LeadEventsRepositoryError> {
        let body = serde_json::to_vec(notification).map_err(|e| {
            LeadEventsRepositoryError::Unknown(
                anyhow!(e).context("Error serializing lead notification"),
            )
        })?;

        self.s3_client
            .put_object(PutObjectRequest {
                bucket: self.bucket_name.clone(),
                key: object_key.to_string(),
                body: Some(body.into()),
                content_type: Some(JSON_CONTENT_TYPE.to_owned()),
                ..PutObjectRequest::default()
            })
            .await
            .map_err(|e| {
                LeadEventsRepositoryError::Unknown(
                    anyhow!(e).context("Error writing lead notification to S3"),
                )
            })?;

        Ok(())
    }
}
