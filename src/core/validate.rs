use crate::domain::model::Edition;
use crate::utils::isbn::to_isbn_13;

pub const MISSING_METADATA_REASON: &str = "missing book metadata necessary for sponsorship";

/// An edition that carries everything needed to quote a price.
#[derive(Debug, Clone)]
pub struct ValidatedEdition {
    pub isbn13: String,
    pub work_id: String,
    pub num_pages: u32,
}

/// Derive the 13-digit ISBN for an edition: a stored ISBN-13 wins,
/// otherwise the first ISBN-10 is converted. No fallback between the two;
/// a malformed stored ISBN-13 fails outright.
pub fn derive_isbn_13(edition: &Edition) -> Option<String> {
    edition
        .isbn_13
        .first()
        .or_else(|| edition.isbn_10.first())
        .and_then(|raw| to_isbn_13(raw))
}

/// Check that the edition has the minimum bibliographic fields required to
/// quote a price. On failure, the names of the absent fields come back so
/// the verdict can report exactly what is missing.
pub fn validate_edition(edition: &Edition) -> Result<ValidatedEdition, Vec<&'static str>> {
    let mut missing = Vec::new();

    if edition.publishers.is_empty() {
        missing.push("publishers");
    }
    if edition.title.as_deref().map_or(true, str::is_empty) {
        missing.push("title");
    }
    if edition.publish_date.as_deref().map_or(true, str::is_empty) {
        missing.push("publish_date");
    }
    if edition.covers.is_empty() {
        missing.push("covers");
    }

    let num_pages = edition.number_of_pages.unwrap_or(0);
    if num_pages == 0 {
        missing.push("number_of_pages");
    }

    let isbn13 = derive_isbn_13(edition);
    if isbn13.is_none() {
        missing.push("isbn_13");
    }

    let work_id = edition.work_id();
    if work_id.is_none() {
        missing.push("works");
    }

    match (isbn13, work_id) {
        (Some(isbn13), Some(work_id)) if missing.is_empty() => Ok(ValidatedEdition {
            isbn13,
            work_id: work_id.to_string(),
            num_pages,
        }),
        _ => Err(missing),
    }
}
