use crate::config::ServicesConfig;
use crate::domain::ports::BooksellerMetadata;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Client for the secondhand-bookseller metadata service. Only the price
/// estimate is of interest here; an absent price means the book cannot be
/// quoted.
pub struct BooksellerClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl BooksellerClient {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.bookseller_url.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PriceEnvelope {
    #[serde(default, alias = "price_amt")]
    price: Option<f64>,
}

#[async_trait]
impl BooksellerMetadata for BooksellerClient {
    async fn price_estimate(&self, isbn13: &str) -> Result<Option<f64>> {
        let mut request = self.client.get(&self.endpoint).query(&[("isbn", isbn13)]);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Bookseller response status: {}", response.status());

        let envelope: PriceEnvelope = response.error_for_status()?.json().await?;
        Ok(envelope.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> BooksellerClient {
        BooksellerClient::new(&ServicesConfig {
            bookseller_url: server.url("/prices"),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_price_present() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/prices")
                .query_param("isbn", "9780441788385");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"price": 4.00}));
        });

        let price = client_for(&server).price_estimate("9780441788385").await.unwrap();

        api_mock.assert();
        assert_eq!(price, Some(4.00));
    }

    #[tokio::test]
    async fn test_legacy_price_amt_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/prices");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"price_amt": 12.50}));
        });

        let price = client_for(&server).price_estimate("9780441788385").await.unwrap();
        assert_eq!(price, Some(12.50));
    }

    #[tokio::test]
    async fn test_absent_price() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/prices");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({}));
        });

        let price = client_for(&server).price_estimate("9780441788385").await.unwrap();
        assert_eq!(price, None);
    }

    #[tokio::test]
    async fn test_null_price() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/prices");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"price": null}));
        });

        let price = client_for(&server).price_estimate("9780441788385").await.unwrap();
        assert_eq!(price, None);
    }

    #[tokio::test]
    async fn test_server_error_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/prices");
            then.status(500);
        });

        assert!(client_for(&server).price_estimate("9780441788385").await.is_err());
    }
}
