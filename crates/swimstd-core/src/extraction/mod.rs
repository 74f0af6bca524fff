pub mod command;
pub mod dump;
pub mod xlsx;

use crate::error::SwimStdError;
use serde::{Deserialize, Serialize};

/// Text of one table cell; `None` when the extractor saw no text.
pub type Cell = Option<String>;

/// One row of a table, cells in column order.
pub type Row = Vec<Cell>;

pub type Table = Vec<Row>;

/// Tables found on a single page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTables {
    pub page_number: usize,
    pub tables: Vec<Table>,
}

/// Trait for table extraction backends.
pub trait TableExtractor: Send + Sync {
    /// Extract the cell grids of every table, returning one PageTables per page.
    fn extract_tables(&self, bytes: &[u8]) -> Result<Vec<PageTables>, SwimStdError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
