use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use http::Method;
use lambda_http::{run, service_fn, Body, Error, Request};
use reqwest::StatusCode;

use common::aws_clients::s3::get_s3_client;
use common::config::ConfigLoader;
use config::Config;
use leadgen_webhook::forward::{HttpLeadForwarder, LeadForwarder};
use leadgen_webhook::http::errors::{
    invalid_structure_response, method_not_allowed_response, missing_body_response,
    unknown_error_response,
};
use leadgen_webhook::http::lambda_proxy::LambdaProxyHttpResponse;
use leadgen_webhook::http_lambda_main;
use leadgen_webhook::lambda_structure::http_lambda_main::HttpLambdaResponse;
use leadgen_webhook::result::error::LambdaError;
use model::lead::object_key::LeadObjectKey;
use model::lead::LeadNotification;
use repositories::lead_events::lead_events_repository_impl::LeadEventsRepositoryImpl;
use repositories::lead_events::LeadEventsRepository;

mod config;

pub const EVENT_PROCESSED_MESSAGE: &str = "Event processed and forwarded successfully";

pub struct State<R: LeadEventsRepository, F: LeadForwarder> {
    pub config: Config,
    pub lead_events_repository: Arc<R>,
    pub forwarder: F,
}

http_lambda_main!(
    {
        let config = ConfigLoader::load_default::<Config>();
        let lead_events_repository = Arc::new(LeadEventsRepositoryImpl::new(
            config.bucket_name.clone(),
            get_s3_client(),
        ));
        let forwarder = HttpLeadForwarder::new(config.destination_url.clone());

        State {
            config,
            lead_events_repository,
            forwarder,
        }
    },
    process_lead_notification
);

async fn process_lead_notification(
    request: Request,
    state: &State<impl LeadEventsRepository, impl LeadForwarder>,
) -> HttpLambdaResponse {
    if request.method() != Method::POST {
        return Err(method_not_allowed_response());
    }

    let raw_body = match request.body() {
        Body::Text(body) if !body.is_empty() => body,
        _ => return Err(missing_body_response()),
    };

    let notification: LeadNotification = serde_json::from_str(raw_body).map_err(|e| {
        unknown_error_response(LambdaError::Unknown(
            anyhow!(e).context("Error decoding lead notification body"),
        ))
    })?;

    let lead = match notification.extract_lead() {
        Ok(lead) => lead,
        Err(e) => {
            tracing::error!(
                error = %e,
                "Unexpected event structure: {}",
                serde_json::to_string(&notification).unwrap_or_default(),
            );
            return Err(invalid_structure_response());
        }
    };

    tracing::info!(page_id = ?lead.page_id, "Extracted page_id: {:?}", lead.page_id);
    tracing::info!(
        leadgen_id = ?lead.leadgen_id,
        "Extracted leadgen_id: {:?}",
        lead.leadgen_id,
    );

    let object_key = LeadObjectKey::new(lead.page_id, lead.leadgen_id, Utc::now());

    state
        .lead_events_repository
        .store_notification(&object_key, &notification)
        .await
        .map_err(|e| {
            unknown_error_response(LambdaError::Unknown(
                anyhow!(e).context("Error storing lead notification"),
            ))
        })?;

    tracing::info!(object_key = %object_key, "Data saved to S3: {object_key}");

    // Forwarding is best effort. Storage is the authoritative action, so a
    // failure here must not change the response to the platform.
    match state.forwarder.forward(lead.changes).await {
        Ok(response) if response.status.as_u16() >= 400 => {
            tracing::error!(
                status = %response.status,
                body = %response.body,
                "Failed to forward data with status {}: {}",
                response.status,
                response.body,
            );
        }
        Ok(_) => (),
        Err(e) => {
            tracing::error!(
                error = ?e,
                destination_url = %state.config.destination_url,
                "Failed to forward data: {e}",
            );
        }
    }

    LambdaProxyHttpResponse {
        status_code: StatusCode::OK,
        body: Some(EVENT_PROCESSED_MESSAGE.to_owned()),
        ..LambdaProxyHttpResponse::default()
    }
    .try_into()
}
