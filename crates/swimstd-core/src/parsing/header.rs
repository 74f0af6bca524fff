use crate::extraction::Cell;
use crate::layout::ColumnLayout;
use crate::parsing::cell;

/// Detect an age-group header row and return its label.
///
/// A header carries the Girls marker in its Girls marker column, the Boys
/// marker in its Boys marker column and the age label in the label column.
/// Rows narrower than `min_columns` never match. A header with a blank
/// label is treated as an ordinary row.
pub fn detect_age_group(row: &[Cell], layout: &ColumnLayout) -> Option<String> {
    if row.len() < layout.min_columns {
        return None;
    }

    let girls = cell(row, layout.girls_marker_column)?;
    let boys = cell(row, layout.boys_marker_column)?;
    if !girls.contains(layout.girls_marker.as_str()) || !boys.contains(layout.boys_marker.as_str())
    {
        return None;
    }

    let label = cell(row, layout.label_column)?.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}
