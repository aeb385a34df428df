use crate::config::CiviCrmConfig;
use crate::domain::model::SponsorshipRecord;
use crate::utils::error::{Result, SponsorError};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

// CRM custom field ids for the sponsorship program
pub const CIVI_USERNAME: &str = "custom_51";
pub const CIVI_ISBN: &str = "custom_52";
pub const CIVI_CONTEXT: &str = "custom_53";

const FINANCIAL_TYPE: &str = "Book Sponsorship";

/// Thin CRM glue. Contact and contribution lookups only; the eligibility
/// pipeline never goes through here.
pub struct CiviCrmClient {
    client: Client,
    config: CiviCrmConfig,
}

#[derive(Debug, Deserialize)]
struct CrmEnvelope {
    #[serde(default)]
    is_error: i64,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    values: Option<Vec<Map<String, Value>>>,
}

impl CiviCrmClient {
    pub fn new(config: &CiviCrmConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// The CRM API wants the request body flattened into a `json` query
    /// parameter alongside the credential parameters.
    async fn get(&self, entity: &str, payload: Map<String, Value>) -> Result<Vec<Map<String, Value>>> {
        let payload = serde_json::to_string(&Value::Object(payload))?;
        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("entity", entity),
                ("action", "get"),
                ("api_key", self.config.api_key.as_str()),
                ("key", self.config.site_key.as_str()),
                ("json", payload.as_str()),
            ])
            .header("Authorization", format!("Basic {}", self.config.auth))
            .send()
            .await?;
        tracing::debug!("CRM {} response status: {}", entity, response.status());

        let envelope: CrmEnvelope = response.error_for_status()?.json().await?;
        if envelope.is_error != 0 {
            return Err(SponsorError::CrmError {
                message: envelope
                    .error_message
                    .unwrap_or_else(|| "unspecified CRM error".to_string()),
            });
        }
        Ok(envelope.values.unwrap_or_default())
    }

    /// Resolve an archive username to a CRM contact id, if the CRM knows
    /// that user at all.
    pub async fn contact_id_by_username(&self, username: &str) -> Result<Option<String>> {
        let mut payload = Map::new();
        payload.insert(CIVI_USERNAME.to_string(), Value::from(username));
        payload.insert("sequential".to_string(), Value::from(1));

        let contacts = self.get("Contact", payload).await?;
        Ok(contacts
            .first()
            .and_then(|contact| contact.get("contact_id"))
            .and_then(value_to_string))
    }

    /// Sponsorship contributions recorded against a contact, optionally
    /// narrowed to a single ISBN.
    pub async fn sponsorships_by_contact_id(
        &self,
        contact_id: &str,
        isbn: Option<&str>,
    ) -> Result<Vec<SponsorshipRecord>> {
        let mut payload = Map::new();
        payload.insert("contact_id".to_string(), Value::from(contact_id));
        if let Some(isbn) = isbn {
            payload.insert(CIVI_ISBN.to_string(), Value::from(isbn));
        }
        payload.insert(
            "financial_type_id".to_string(),
            Value::from(FINANCIAL_TYPE),
        );
        payload.insert("sequential".to_string(), Value::from(1));

        let contributions = self.get("Contribution", payload).await?;
        Ok(contributions
            .into_iter()
            .map(|mut record| SponsorshipRecord {
                isbn: pop_string(&mut record, CIVI_ISBN),
                context: pop_string(&mut record, CIVI_CONTEXT),
                receive_date: pop_string(&mut record, "receive_date"),
                total_amount: pop_string(&mut record, "total_amount"),
            })
            .collect())
    }

    /// Books an archive user has sponsored: username -> contact -> records.
    /// An unknown username is an empty list, not an error.
    pub async fn sponsored_editions(&self, archive_username: &str) -> Result<Vec<SponsorshipRecord>> {
        match self.contact_id_by_username(archive_username).await? {
            Some(contact_id) => self.sponsorships_by_contact_id(&contact_id, None).await,
            None => Ok(Vec::new()),
        }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn pop_string(record: &mut Map<String, Value>, key: &str) -> String {
    match record.remove(key) {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
