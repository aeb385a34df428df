use crate::config::ServicesConfig;
use crate::domain::model::AvailabilityStatus;
use crate::domain::ports::WorkAvailability;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Client for the holdings service. One lookup covers every edition of
/// the work, keyed by work identifier in the response.
pub struct HoldingsClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HoldingsClient {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.availability_url.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityEnvelope {
    #[serde(default)]
    responses: HashMap<String, AvailabilityStatus>,
}

#[async_trait]
impl WorkAvailability for HoldingsClient {
    async fn work_availability(
        &self,
        work_id: &str,
    ) -> Result<HashMap<String, AvailabilityStatus>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("identifier", work_id)]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Availability response status: {}", response.status());

        let envelope: AvailabilityEnvelope = response.error_for_status()?.json().await?;
        Ok(envelope.responses)
    }
}
