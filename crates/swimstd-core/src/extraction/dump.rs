use crate::error::SwimStdError;
use crate::extraction::{PageTables, Table, TableExtractor};
use serde::Deserialize;

/// Reads tables that were extracted ahead of time and stored as JSON.
///
/// Two shapes are accepted:
///
/// ```json
/// [{ "page_number": 1, "tables": [[["Girls", null, "..."]]] }]
/// ```
///
/// or a bare array of tables per page, numbered from 1:
///
/// ```json
/// [[[["Girls", null, "..."]]]]
/// ```
pub struct TableDumpExtractor;

impl TableDumpExtractor {
    pub fn new() -> Self {
        TableDumpExtractor
    }
}

impl Default for TableDumpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for TableDumpExtractor {
    fn extract_tables(&self, bytes: &[u8]) -> Result<Vec<PageTables>, SwimStdError> {
        parse_table_dump(bytes)
    }

    fn backend_name(&self) -> &str {
        "table-dump"
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDump {
    Pages(Vec<PageTables>),
    Bare(Vec<Vec<Table>>),
}

/// Parse a JSON tables dump into pages.
pub fn parse_table_dump(bytes: &[u8]) -> Result<Vec<PageTables>, SwimStdError> {
    let dump: TableDump = serde_json::from_slice(bytes).map_err(|e| {
        SwimStdError::TableDump(format!(
            "expected an array of {{page_number, tables}} objects or an array of tables per page: {e}"
        ))
    })?;

    let pages = match dump {
        TableDump::Pages(pages) => pages,
        TableDump::Bare(pages) => pages
            .into_iter()
            .enumerate()
            .map(|(i, tables)| PageTables {
                page_number: i + 1,
                tables,
            })
            .collect(),
    };

    Ok(pages)
}
