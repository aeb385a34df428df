use crate::config::PricingConfig;
use crate::domain::model::{Edition, PriceQuote, VerdictError};
use crate::domain::ports::SponsorshipPolicy;

/// Ceiling check, then the operator's injected acceptance rule. A quote at
/// exactly the ceiling still qualifies.
pub fn apply<P: SponsorshipPolicy + ?Sized>(
    policy: &P,
    pricing: &PricingConfig,
    edition: &Edition,
    quote: &PriceQuote,
) -> Result<bool, VerdictError> {
    if quote.total_price_cents > pricing.price_ceiling_cents {
        return Err(VerdictError {
            reason: format!("cost exceeds {}", pricing.price_ceiling_cents),
            values: serde_json::json!(quote.total_price_cents),
        });
    }
    Ok(policy.is_accepted(edition))
}

/// Fallback acceptance rule for contexts where no operator rule is wired
/// in (tests, degraded deployments): the program is considered inactive
/// and nothing is accepted.
pub struct InactiveProgram;

impl SponsorshipPolicy for InactiveProgram {
    fn is_accepted(&self, _edition: &Edition) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AcceptAll;

    impl SponsorshipPolicy for AcceptAll {
        fn is_accepted(&self, _edition: &Edition) -> bool {
            true
        }
    }

    fn quote_totalling(total_price_cents: u64) -> PriceQuote {
        PriceQuote {
            book_cost_cents: 0,
            scan_price_cents: total_price_cents,
            total_price_cents,
        }
    }

    #[test]
    fn test_quote_at_ceiling_is_accepted() {
        let pricing = PricingConfig::default();
        let result = apply(&AcceptAll, &pricing, &Edition::default(), &quote_totalling(5000));
        assert_eq!(result.unwrap(), true);
    }

    #[test]
    fn test_quote_over_ceiling_is_rejected_citing_ceiling() {
        let pricing = PricingConfig::default();
        let err = apply(&AcceptAll, &pricing, &Edition::default(), &quote_totalling(5001))
            .unwrap_err();
        assert_eq!(err.reason, "cost exceeds 5000");
        assert_eq!(err.values, serde_json::json!(5001));
    }

    #[test]
    fn test_default_policy_accepts_nothing() {
        let pricing = PricingConfig::default();
        let result = apply(
            &InactiveProgram,
            &pricing,
            &Edition::default(),
            &quote_totalling(100),
        );
        assert_eq!(result.unwrap(), false);
    }
}
