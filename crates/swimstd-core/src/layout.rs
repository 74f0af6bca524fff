use crate::error::SwimStdError;
use crate::model::Course;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column positions for one gender's times.
///
/// Each triple lists the columns of tiers A, B+ and B, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideColumns {
    pub scy: [usize; 3],
    pub scm: [usize; 3],
    pub lcm: [usize; 3],
}

impl SideColumns {
    pub fn course(&self, course: Course) -> [usize; 3] {
        match course {
            Course::Scy => self.scy,
            Course::Scm => self.scm,
            Course::Lcm => self.lcm,
        }
    }

    fn all(&self) -> impl Iterator<Item = usize> + '_ {
        self.scy.iter().chain(&self.scm).chain(&self.lcm).copied()
    }
}

/// Positional description of a time-standards table.
///
/// The default matches the published two-sided layout: Girls times in
/// columns 0-8, the event name in column 9 and Boys times in columns 10-18.
/// A different document variant only needs a different `ColumnLayout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Rows narrower than this are never age-group headers.
    pub min_columns: usize,
    /// Holds the event name on data rows and the age label on header rows.
    pub label_column: usize,
    pub girls_marker_column: usize,
    pub girls_marker: String,
    pub boys_marker_column: usize,
    pub boys_marker: String,
    /// Rows skipped after a header before event data starts
    /// (the header itself plus the column-label row).
    pub header_row_span: usize,
    /// Label-column values that mark sub-header or noise rows.
    pub skip_tokens: Vec<String>,
    pub girls: SideColumns,
    pub boys: SideColumns,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            min_columns: 19,
            label_column: 9,
            girls_marker_column: 0,
            girls_marker: "Girls".into(),
            boys_marker_column: 10,
            boys_marker: "Boys".into(),
            header_row_span: 2,
            skip_tokens: ["", "Event", "Girls", "Boys", "SCY A"]
                .into_iter()
                .map(String::from)
                .collect(),
            girls: SideColumns {
                scy: [0, 1, 2],
                scm: [3, 4, 5],
                lcm: [6, 7, 8],
            },
            boys: SideColumns {
                scy: [10, 11, 12],
                scm: [13, 14, 15],
                lcm: [16, 17, 18],
            },
        }
    }
}

impl ColumnLayout {
    pub fn is_skip_token(&self, label: &str) -> bool {
        self.skip_tokens.iter().any(|t| t == label)
    }
}

/// Load a column layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<ColumnLayout, SwimStdError> {
    let content = std::fs::read_to_string(path).map_err(|e| SwimStdError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let layout: ColumnLayout =
        serde_json::from_str(&content).map_err(|e| SwimStdError::LayoutLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a column layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<ColumnLayout, SwimStdError> {
    let layout: ColumnLayout = serde_json::from_str(json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that every position a layout refers to fits inside a header-width row.
pub fn validate_layout(layout: &ColumnLayout) -> Result<(), SwimStdError> {
    if layout.girls_marker.trim().is_empty() || layout.boys_marker.trim().is_empty() {
        return Err(SwimStdError::LayoutInvalid(
            "gender markers must not be empty".into(),
        ));
    }

    if layout.header_row_span == 0 {
        return Err(SwimStdError::LayoutInvalid(
            "header_row_span must be at least 1".into(),
        ));
    }

    let named = [
        ("label_column", layout.label_column),
        ("girls_marker_column", layout.girls_marker_column),
        ("boys_marker_column", layout.boys_marker_column),
    ];
    for (name, col) in named {
        if col >= layout.min_columns {
            return Err(SwimStdError::LayoutInvalid(format!(
                "{} {} is outside min_columns {}",
                name, col, layout.min_columns
            )));
        }
    }

    for col in layout.girls.all().chain(layout.boys.all()) {
        if col >= layout.min_columns {
            return Err(SwimStdError::LayoutInvalid(format!(
                "time column {} is outside min_columns {}",
                col, layout.min_columns
            )));
        }
        if col == layout.label_column {
            return Err(SwimStdError::LayoutInvalid(format!(
                "column {} is used both as label and time column",
                col
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        assert!(validate_layout(&ColumnLayout::default()).is_ok());
    }

    #[test]
    fn test_default_layout_round_trips_through_json() {
        let json = serde_json::to_string_pretty(&ColumnLayout::default()).unwrap();
        let parsed = parse_layout_str(&json).unwrap();
        assert_eq!(parsed, ColumnLayout::default());
    }

    #[test]
    fn test_time_column_out_of_range() {
        let mut layout = ColumnLayout::default();
        layout.boys.lcm = [16, 17, 19];
        let err = validate_layout(&layout).unwrap_err();
        assert!(err.to_string().contains("time column 19"));
    }

    #[test]
    fn test_label_column_reused_as_time() {
        let mut layout = ColumnLayout::default();
        layout.girls.lcm = [6, 7, 9];
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_zero_header_span_rejected() {
        let mut layout = ColumnLayout::default();
        layout.header_row_span = 0;
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let mut layout = ColumnLayout::default();
        layout.boys_marker = " ".into();
        assert!(validate_layout(&layout).is_err());
    }

    #[test]
    fn test_load_layout_missing_file() {
        let err = load_layout(Path::new("/nonexistent/layout.json")).unwrap_err();
        assert!(matches!(err, SwimStdError::LayoutLoad { .. }));
    }

    #[test]
    fn test_skip_tokens() {
        let layout = ColumnLayout::default();
        assert!(layout.is_skip_token("SCY A"));
        assert!(layout.is_skip_token(""));
        assert!(!layout.is_skip_token("50 Free"));
    }
}
