pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::{PricingConfig, SponsorConfig};

pub use adapters::{BooksellerClient, CiviCrmClient, DedupeClient, HoldingsClient};
pub use core::pipeline::SponsorshipPipeline;
pub use core::policy::InactiveProgram;
pub use domain::model::{Edition, PriceQuote, SponsorshipRecord, Verdict};
pub use domain::ports::SponsorshipPolicy;
pub use utils::error::{Result, SponsorError};
