#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Process-wide configuration, built once at startup and passed by
/// reference into the components that need it. No global lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorConfig {
    pub services: ServicesConfig,
    pub civicrm: CiviCrmConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Base URL for the archive domain; the dedupe registry and the
    /// donation page live under it.
    pub ia_base_url: String,
    pub availability_url: String,
    pub bookseller_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            ia_base_url: "https://archive.org".to_string(),
            availability_url: "https://archive.org/services/availability/v2".to_string(),
            bookseller_url: "https://products.betterworldbooks.com/service.aspx".to_string(),
            timeout_seconds: Some(10),
        }
    }
}

/// Credentials for the CRM glue endpoints. All empty by default; the
/// eligibility pipeline itself never touches the CRM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CiviCrmConfig {
    pub url: String,
    pub api_key: String,
    pub site_key: String,
    pub auth: String,
}

/// Scan-cost and ceiling constants. Policy parameters, not physics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub setup_cost_cents: u64,
    pub page_cost_cents: u64,
    pub price_ceiling_cents: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            setup_cost_cents: 300,
            page_cost_cents: 12,
            price_ceiling_cents: 5000,
        }
    }
}

impl SponsorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for SponsorConfig {
    fn validate(&self) -> Result<()> {
        validate_url("services.ia_base_url", &self.services.ia_base_url)?;
        validate_url("services.availability_url", &self.services.availability_url)?;
        validate_url("services.bookseller_url", &self.services.bookseller_url)?;
        // CRM is optional glue; only check the URL when one is configured
        if !self.civicrm.url.is_empty() {
            validate_url("civicrm.url", &self.civicrm.url)?;
        }
        validate_positive_number(
            "pricing.price_ceiling_cents",
            self.pricing.price_ceiling_cents,
            1,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = SponsorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing.setup_cost_cents, 300);
        assert_eq!(config.pricing.page_cost_cents, 12);
        assert_eq!(config.pricing.price_ceiling_cents, 5000);
    }

    #[test]
    fn test_from_path_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[services]
ia_base_url = "https://staging.archive.org"

[pricing]
price_ceiling_cents = 7500
"#
        )
        .unwrap();

        let config = SponsorConfig::from_path(file.path()).unwrap();
        assert_eq!(config.services.ia_base_url, "https://staging.archive.org");
        assert_eq!(config.pricing.price_ceiling_cents, 7500);
        // untouched sections fall back to defaults
        assert_eq!(config.pricing.page_cost_cents, 12);
        assert_eq!(
            config.services.bookseller_url,
            "https://products.betterworldbooks.com/service.aspx"
        );
    }

    #[test]
    fn test_invalid_ceiling_rejected() {
        let mut config = SponsorConfig::default();
        config.pricing.price_ceiling_cents = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = SponsorConfig::default();
        config.services.availability_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }
}
