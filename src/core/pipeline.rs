use crate::config::SponsorConfig;
use crate::core::checks::{do_we_want_it, is_borrowable};
use crate::core::policy;
use crate::core::pricing;
use crate::core::validate::{derive_isbn_13, validate_edition, MISSING_METADATA_REASON};
use crate::domain::model::{Edition, Verdict, VerdictError};
use crate::domain::ports::{
    BooksellerMetadata, DedupeRegistry, SponsorshipPolicy, WorkAvailability,
};
use url::Url;

/// Builds the donation page link for an ISBN. Attached to every verdict
/// whatever the outcome, so a caller can always offer the campaign link.
pub fn donation_url(base: &str, isbn13: &str) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            url.set_path("/donate");
            url.query_pairs_mut()
                .append_pair("campaign", "pilot")
                .append_pair("type", "sponsorship")
                .append_pair("context", "ol")
                .append_pair("isbn", isbn13);
            url.into()
        }
        // config URLs are validated at startup; keep the link well-formed anyway
        Err(_) => format!(
            "{}/donate?campaign=pilot&type=sponsorship&context=ol&isbn={}",
            base.trim_end_matches('/'),
            isbn13
        ),
    }
}

/// The eligibility pipeline: validate, check holdings, check the dedupe
/// registry, price, then apply policy. Strictly sequential, short-circuits
/// on the first terminal condition. Every pathway ends in a well-formed
/// verdict; no error escapes to the caller.
pub struct SponsorshipPipeline<A, D, B, P>
where
    A: WorkAvailability,
    D: DedupeRegistry,
    B: BooksellerMetadata,
    P: SponsorshipPolicy,
{
    availability: A,
    dedupe: D,
    bookseller: B,
    policy: P,
    config: SponsorConfig,
}

impl<A, D, B, P> SponsorshipPipeline<A, D, B, P>
where
    A: WorkAvailability,
    D: DedupeRegistry,
    B: BooksellerMetadata,
    P: SponsorshipPolicy,
{
    pub fn new(availability: A, dedupe: D, bookseller: B, policy: P, config: SponsorConfig) -> Self {
        Self {
            availability,
            dedupe,
            bookseller,
            policy,
            config,
        }
    }

    pub async fn qualify(&self, edition: &Edition) -> Verdict {
        // the donation link wants the normalized ISBN, but an edition can
        // fail validation before one is derivable
        let link_isbn = derive_isbn_13(edition)
            .or_else(|| edition.isbn_13.first().cloned())
            .or_else(|| edition.isbn_10.first().cloned())
            .unwrap_or_default();
        let mut verdict = Verdict {
            is_eligible: false,
            price: None,
            error: None,
            url: donation_url(&self.config.services.ia_base_url, &link_isbn),
        };

        let validated = match validate_edition(edition) {
            Ok(validated) => validated,
            Err(missing) => {
                tracing::debug!("Edition failed metadata validation: {:?}", missing);
                verdict.error = Some(VerdictError {
                    reason: MISSING_METADATA_REASON.to_string(),
                    values: serde_json::json!(missing),
                });
                return verdict;
            }
        };

        tracing::debug!(
            "Checking borrow availability for work {} (isbn {})",
            validated.work_id,
            validated.isbn13
        );
        if is_borrowable(&self.availability, &validated.work_id).await {
            // some edition of this work is already on the shelf; reject
            // quietly, this is not an error
            return verdict;
        }

        let (wanted, matches) = do_we_want_it(&self.dedupe, &validated.isbn13).await;
        if !wanted {
            verdict.error = Some(VerdictError {
                reason: "matches".to_string(),
                values: matches
                    .map(serde_json::Value::Array)
                    .unwrap_or(serde_json::Value::Null),
            });
            return verdict;
        }

        let Some(quote) = pricing::estimate(
            &self.bookseller,
            &self.config.pricing,
            &validated.isbn13,
            validated.num_pages,
        )
        .await
        else {
            // no quote, no eligibility; the verdict stays silent here
            return verdict;
        };

        match policy::apply(&self.policy, &self.config.pricing, edition, &quote) {
            Ok(accepted) => verdict.is_eligible = accepted,
            Err(rejection) => verdict.error = Some(rejection),
        }
        verdict.price = Some(quote);
        verdict
    }
}
