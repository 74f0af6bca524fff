use std::io::Cursor;

use calamine::{Data, Range, Reader};

use crate::error::SwimStdError;
use crate::extraction::{Cell, PageTables, Table, TableExtractor};

/// Reads time-standards tables from a spreadsheet export of the document.
///
/// Each worksheet becomes one page holding a single table, so a workbook
/// with one sheet per age bracket walks the same way as a multi-page PDF.
pub struct XlsxExtractor;

impl XlsxExtractor {
    pub fn new() -> Self {
        XlsxExtractor
    }
}

impl Default for XlsxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for XlsxExtractor {
    fn extract_tables(&self, bytes: &[u8]) -> Result<Vec<PageTables>, SwimStdError> {
        let cursor = Cursor::new(bytes);
        let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
            .map_err(|e| SwimStdError::Spreadsheet(format!("failed to open workbook: {e}")))?;

        let pages = workbook
            .worksheets()
            .into_iter()
            .enumerate()
            .map(|(i, (name, range))| {
                tracing::debug!(sheet = %name, "reading worksheet");
                PageTables {
                    page_number: i + 1,
                    tables: vec![range_to_table(&range)],
                }
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "spreadsheet"
    }
}

/// Convert a used-cell range into a grid anchored at A1.
///
/// calamine ranges start at the first used cell, so leading rows and
/// columns are padded back in to keep column positions absolute.
fn range_to_table(range: &Range<Data>) -> Table {
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return Vec::new(),
    };

    let mut table: Table = (0..start_row).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut cells: Vec<Cell> = vec![None; start_col as usize];
        cells.extend(row.iter().map(cell_text));
        table.push(cells);
    }
    table
}

fn cell_text(cell: &Data) -> Cell {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        _ => Some(format!("{cell}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("1:05.39".into())), Some("1:05.39".into()));
        assert_eq!(cell_text(&Data::Float(29.19)), Some("29.19".into()));
        assert_eq!(cell_text(&Data::Int(12)), Some("12".into()));
    }

    #[test]
    fn test_range_offset_is_padded() {
        let mut range: Range<Data> = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("Girls".into()));
        range.set_value((2, 3), Data::String("50 Free".into()));

        let table = range_to_table(&range);
        assert_eq!(table.len(), 3);
        assert!(table[0].is_empty());
        assert_eq!(table[1], vec![None, None, Some("Girls".into()), None]);
        assert_eq!(table[2], vec![None, None, None, Some("50 Free".into())]);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_table(&range).is_empty());
    }

    #[test]
    fn test_not_a_workbook() {
        let err = XlsxExtractor::new()
            .extract_tables(b"definitely not a zip")
            .unwrap_err();
        assert!(matches!(err, SwimStdError::Spreadsheet(_)));
    }
}
