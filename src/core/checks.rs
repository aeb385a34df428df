//! The two remote pre-checks, side by side because their failure policies
//! are deliberate mirror images: an availability lookup that fails lets the
//! pipeline continue, a dedupe lookup that fails rejects sponsorship.

use crate::domain::ports::{DedupeRegistry, WorkAvailability};

/// True when any edition of the work can already be borrowed, in which case
/// sponsoring a scan would be pointless. A status of "error" (or no data at
/// all) means the service could not tell, and that reads as "not currently
/// available" so a flaky holdings service never blocks sponsorship.
pub async fn is_borrowable<A: WorkAvailability + ?Sized>(service: &A, work_id: &str) -> bool {
    match service.work_availability(work_id).await {
        Ok(availability) => availability
            .get(work_id)
            .map(|record| record.status != "error")
            .unwrap_or(false),
        Err(e) => {
            tracing::warn!("Availability lookup failed for work {}: {}", work_id, e);
            false
        }
    }
}

/// "Do we want it": asks the registry whether this ISBN is still wanted,
/// i.e. not already scanned, promised or sponsored. Returns the flag plus
/// the matching registry records.
///
/// A failed or malformed lookup returns `(false, None)`: here ambiguity
/// must reject, because proceeding could mean paying twice for one book.
pub async fn do_we_want_it<D: DedupeRegistry + ?Sized>(
    registry: &D,
    isbn13: &str,
) -> (bool, Option<Vec<serde_json::Value>>) {
    match registry.lookup_isbn(isbn13).await {
        Ok(response) => {
            let wanted = response.wanted();
            (wanted, Some(response.books))
        }
        Err(e) => {
            tracing::error!("DWWI lookup failed for isbn {}: {}", isbn13, e);
            // 寧可漏掉一本,也不要重複贊助
            (false, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AvailabilityStatus, DedupeResponse};
    use crate::utils::error::{Result, SponsorError};
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct FixedAvailability(Option<HashMap<String, AvailabilityStatus>>);

    #[async_trait]
    impl WorkAvailability for FixedAvailability {
        async fn work_availability(
            &self,
            _work_id: &str,
        ) -> Result<HashMap<String, AvailabilityStatus>> {
            self.0.clone().ok_or(SponsorError::MissingConfigError {
                field: "simulated outage".to_string(),
            })
        }
    }

    struct FixedDedupe(Option<DedupeResponse>);

    #[async_trait]
    impl DedupeRegistry for FixedDedupe {
        async fn lookup_isbn(&self, _isbn13: &str) -> Result<DedupeResponse> {
            self.0.clone().ok_or(SponsorError::MissingConfigError {
                field: "simulated outage".to_string(),
            })
        }
    }

    fn status_map(work_id: &str, status: &str) -> HashMap<String, AvailabilityStatus> {
        let mut map = HashMap::new();
        map.insert(
            work_id.to_string(),
            AvailabilityStatus {
                status: status.to_string(),
                extra: HashMap::new(),
            },
        );
        map
    }

    #[tokio::test]
    async fn test_available_work_is_borrowable() {
        let service = FixedAvailability(Some(status_map("OL1W", "available")));
        assert!(is_borrowable(&service, "OL1W").await);
    }

    #[tokio::test]
    async fn test_error_status_is_not_borrowable() {
        let service = FixedAvailability(Some(status_map("OL1W", "error")));
        assert!(!is_borrowable(&service, "OL1W").await);
    }

    #[tokio::test]
    async fn test_absent_work_entry_is_not_borrowable() {
        let service = FixedAvailability(Some(HashMap::new()));
        assert!(!is_borrowable(&service, "OL1W").await);
    }

    #[tokio::test]
    async fn test_availability_outage_lets_pipeline_continue() {
        let service = FixedAvailability(None);
        assert!(!is_borrowable(&service, "OL1W").await);
    }

    #[tokio::test]
    async fn test_wanted_isbn_with_matches() {
        let registry = FixedDedupe(Some(DedupeResponse {
            response: 1,
            books: vec![serde_json::json!({"sponsor": "pending"})],
        }));
        let (wanted, matches) = do_we_want_it(&registry, "9780441788385").await;
        assert!(wanted);
        assert_eq!(matches.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unwanted_isbn() {
        let registry = FixedDedupe(Some(DedupeResponse {
            response: 0,
            books: vec![serde_json::json!({"status": "scanned"})],
        }));
        let (wanted, matches) = do_we_want_it(&registry, "9780441788385").await;
        assert!(!wanted);
        assert_eq!(matches.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dedupe_outage_rejects() {
        let registry = FixedDedupe(None);
        let (wanted, matches) = do_we_want_it(&registry, "9780441788385").await;
        assert!(!wanted);
        assert!(matches.is_none());
    }
}
