use crate::config::ServicesConfig;
use crate::domain::model::DedupeResponse;
use crate::domain::ports::DedupeRegistry;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Client for the deduplication registry. The lookup always includes
/// promised and sponsored books, not just completed scans.
pub struct DedupeClient {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl DedupeClient {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.ia_base_url.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[async_trait]
impl DedupeRegistry for DedupeClient {
    async fn lookup_isbn(&self, isbn13: &str) -> Result<DedupeResponse> {
        let url = format!(
            "{}/book/marc/ol_dedupe.php",
            self.base_url.trim_end_matches('/')
        );
        let mut request = self.client.get(&url).query(&[
            ("search_field", "isbn"),
            ("include_promises", "true"),
            ("search_id", isbn13),
        ]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Dedupe response status: {}", response.status());

        let body: DedupeResponse = response.error_for_status()?.json().await?;
        Ok(body)
    }
}
