// Adapters layer: reqwest-backed clients for the external collaborator
// services. Each implements the matching domain port; the CRM client is
// plain glue with no port behind it.

pub mod availability;
pub mod bookseller;
pub mod civicrm;
pub mod dedupe;

pub use availability::HoldingsClient;
pub use bookseller::BooksellerClient;
pub use civicrm::CiviCrmClient;
pub use dedupe::DedupeClient;
