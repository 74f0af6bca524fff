pub mod error;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod observer;
pub mod parsing;

use error::SwimStdError;
use extraction::TableExtractor;
use layout::ColumnLayout;
use model::{Document, DocumentMeta};
use observer::ParseObserver;

/// Main API entry point: turn a time-standards document into a `Document`.
///
/// The extractor yields the cell grids of every table; each table is then
/// walked for age-group blocks. Only extraction failures are errors: rows
/// that cannot be interpreted are skipped and missing cells become `null`
/// times.
pub fn extract_standards(
    bytes: &[u8],
    extractor: &dyn TableExtractor,
    meta: DocumentMeta,
    layout: &ColumnLayout,
    observer: &dyn ParseObserver,
) -> Result<Document, SwimStdError> {
    let pages = extractor.extract_tables(bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted tables"
    );

    let age_groups = parsing::parse_pages(&pages, layout, observer);
    if age_groups.is_empty() {
        tracing::warn!("no age groups found in document");
    }

    Ok(Document::new(meta, age_groups))
}
