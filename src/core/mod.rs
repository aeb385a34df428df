pub mod checks;
pub mod pipeline;
pub mod policy;
pub mod pricing;
pub mod validate;

pub use crate::domain::model::{Edition, PriceQuote, Verdict, VerdictError};
pub use crate::domain::ports::{
    BooksellerMetadata, DedupeRegistry, SponsorshipPolicy, WorkAvailability,
};
pub use crate::utils::error::Result;
