use crate::config::PricingConfig;
use crate::domain::model::PriceQuote;
use crate::domain::ports::BooksellerMetadata;

/// Combine a secondhand acquisition price with the fixed scanning costs.
pub fn quote(pricing: &PricingConfig, price_amount: f64, num_pages: u32) -> PriceQuote {
    let book_cost_cents = (price_amount * 100.0).round() as u64;
    let scan_price_cents = pricing.setup_cost_cents + pricing.page_cost_cents * num_pages as u64;
    PriceQuote {
        book_cost_cents,
        scan_price_cents,
        total_price_cents: scan_price_cents + book_cost_cents,
    }
}

/// Ask the bookseller for an acquisition estimate and build the full quote.
/// No price means no quote: absence is "cannot quote", never zero cost.
pub async fn estimate<B: BooksellerMetadata + ?Sized>(
    service: &B,
    pricing: &PricingConfig,
    isbn13: &str,
    num_pages: u32,
) -> Option<PriceQuote> {
    match service.price_estimate(isbn13).await {
        Ok(Some(amount)) => Some(quote(pricing, amount, num_pages)),
        Ok(None) => {
            tracing::warn!("No secondhand price available for isbn {}", isbn13);
            None
        }
        Err(e) => {
            tracing::warn!("Price lookup failed for isbn {}: {}", isbn13, e);
            None
        }
    }
}
