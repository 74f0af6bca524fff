use crate::extraction::{Cell, Row};
use crate::layout::{ColumnLayout, SideColumns};
use crate::model::{Course, EventRecord, Tier};
use crate::parsing::cell;
use crate::parsing::header::detect_age_group;

/// How a row inside an age-group block is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Header of a different age group; ends the current block.
    NextHeader(String),
    /// Sub-header, column labels or an empty label cell.
    Noise,
    /// Event row carrying the trimmed event name.
    Event(String),
}

/// Classify one row while consuming the block of `current_age`.
///
/// A repeated header with the same label as the current block does not
/// end it; it is classified by its label cell like any other row.
pub fn classify_row(row: &[Cell], current_age: &str, layout: &ColumnLayout) -> RowKind {
    if let Some(age) = detect_age_group(row, layout) {
        if age != current_age {
            return RowKind::NextHeader(age);
        }
    }

    match cell(row, layout.label_column).map(str::trim) {
        Some("") | None => RowKind::Noise,
        Some(name) if layout.is_skip_token(name) => RowKind::Noise,
        Some(name) => RowKind::Event(name.to_string()),
    }
}

/// Events consumed for one age group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBlock {
    pub girls: Vec<EventRecord>,
    pub boys: Vec<EventRecord>,
    /// First row not consumed: the next header, or the table length.
    pub next_index: usize,
}

/// Consume the event rows of `age` starting at `start`.
///
/// Every event row yields exactly one Girls and one Boys record, so both
/// lists always have the same length and pairwise-equal names.
pub fn extract_event_block(
    rows: &[Row],
    start: usize,
    age: &str,
    layout: &ColumnLayout,
) -> EventBlock {
    let mut block = EventBlock::default();
    let mut noise = 0usize;
    let mut i = start;

    while i < rows.len() {
        let row = &rows[i];
        match classify_row(row, age, layout) {
            RowKind::NextHeader(next) => {
                tracing::debug!(age, next = %next, row = i, "block ends at next header");
                break;
            }
            RowKind::Noise => noise += 1,
            RowKind::Event(name) => {
                block.girls.push(event_from_row(row, &name, &layout.girls));
                block.boys.push(event_from_row(row, &name, &layout.boys));
            }
        }
        i += 1;
    }

    if noise > 0 {
        tracing::debug!(age, rows = noise, "skipped noise rows");
    }

    block.next_index = i;
    block
}

/// Build one gender's event record from a row.
///
/// Cells beyond the end of a short row read as missing times.
pub fn event_from_row(row: &[Cell], name: &str, columns: &SideColumns) -> EventRecord {
    let mut event = EventRecord::new(name);
    for course in Course::ALL {
        let times = event.course_mut(course);
        for (tier, col) in Tier::ALL.into_iter().zip(columns.course(course)) {
            times.set(tier, time_value(cell(row, col)));
        }
    }
    event
}

/// Trimmed time text, or `None` when the cell is blank.
fn time_value(cell: Option<&str>) -> Option<String> {
    match cell.map(str::trim) {
        Some(t) if !t.is_empty() => Some(t.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tests::{event_row, header_row, row};

    #[test]
    fn test_event_row_split_into_girls_and_boys() {
        let layout = ColumnLayout::default();
        let rows = vec![row(&[
            "1:05.00", "", "", "1:10.00", "", "", "1:15.00", "", "", "50 Free", "1:00.00", "",
            "", "1:05.00", "", "", "1:10.00", "", "",
        ])];

        let block = extract_event_block(&rows, 0, "9", &layout);
        assert_eq!(block.next_index, 1);

        let girls = &block.girls[0];
        assert_eq!(girls.name, "50 Free");
        assert_eq!(girls.time(Course::Scy, Tier::A), Some("1:05.00"));
        assert_eq!(girls.time(Course::Scy, Tier::BPlus), None);
        assert_eq!(girls.time(Course::Scy, Tier::B), None);
        assert_eq!(girls.time(Course::Scm, Tier::A), Some("1:10.00"));
        assert_eq!(girls.time(Course::Lcm, Tier::A), Some("1:15.00"));

        let boys = &block.boys[0];
        assert_eq!(boys.name, "50 Free");
        assert_eq!(boys.time(Course::Scy, Tier::A), Some("1:00.00"));
        assert_eq!(boys.time(Course::Scm, Tier::A), Some("1:05.00"));
        assert_eq!(boys.time(Course::Lcm, Tier::A), Some("1:10.00"));
        assert_eq!(boys.time(Course::Lcm, Tier::B), None);
    }

    #[test]
    fn test_tier_order_within_course() {
        let layout = ColumnLayout::default();
        let rows = vec![row(&[
            "a", "b+", "b", "", "", "", "", "", "", "100 Back", "", "", "", "", "", "", "x", "y",
            "z",
        ])];
        let block = extract_event_block(&rows, 0, "10", &layout);
        let girls = &block.girls[0];
        assert_eq!(girls.scy.a.as_deref(), Some("a"));
        assert_eq!(girls.scy.b_plus.as_deref(), Some("b+"));
        assert_eq!(girls.scy.b.as_deref(), Some("b"));
        let boys = &block.boys[0];
        assert_eq!(boys.lcm.a.as_deref(), Some("x"));
        assert_eq!(boys.lcm.b_plus.as_deref(), Some("y"));
        assert_eq!(boys.lcm.b.as_deref(), Some("z"));
    }

    #[test]
    fn test_times_and_names_are_trimmed() {
        let layout = ColumnLayout::default();
        let mut cells = event_row(" 200 IM\n", "2:40.19");
        cells[0] = Some(" 2:50.00 ".into());
        cells[1] = Some("   ".into());
        let block = extract_event_block(&[cells], 0, "11-12", &layout);
        assert_eq!(block.girls[0].name, "200 IM");
        assert_eq!(block.girls[0].scy.a.as_deref(), Some("2:50.00"));
        assert_eq!(block.girls[0].scy.b_plus, None);
    }

    #[test]
    fn test_skip_tokens_produce_no_events() {
        let layout = ColumnLayout::default();
        let rows: Vec<Row> = ["Event", "Girls", "Boys", "SCY A", "", "  Event  "]
            .iter()
            .map(|label| event_row(label, "1:00.00"))
            .collect();
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert!(block.girls.is_empty());
        assert!(block.boys.is_empty());
        assert_eq!(block.next_index, rows.len());
    }

    #[test]
    fn test_blank_label_is_noise_without_empty_skip_token() {
        let layout = ColumnLayout {
            skip_tokens: ["Event", "Girls", "Boys", "SCY A"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..ColumnLayout::default()
        };
        let rows = vec![event_row("50 Free", "30.00"), event_row("   ", "31.00")];
        assert_eq!(classify_row(&rows[1], "9", &layout), RowKind::Noise);

        let block = extract_event_block(&rows, 0, "9", &layout);
        let names: Vec<&str> = block.girls.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["50 Free"]);
    }

    #[test]
    fn test_stops_at_next_age_group_header() {
        let layout = ColumnLayout::default();
        let rows = vec![
            event_row("50 Free", "30.00"),
            event_row("100 Free", "1:05.00"),
            header_row("10"),
            event_row("50 Back", "40.00"),
        ];
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert_eq!(block.girls.len(), 2);
        assert_eq!(block.next_index, 2);
    }

    #[test]
    fn test_same_label_header_does_not_stop() {
        let layout = ColumnLayout::default();
        let rows = vec![
            event_row("50 Free", "30.00"),
            header_row("9"),
            event_row("100 Free", "1:05.00"),
        ];
        assert_eq!(
            classify_row(&rows[1], "9", &layout),
            RowKind::Event("9".into())
        );
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert_eq!(block.next_index, 3);
        assert_eq!(block.girls.len(), 3);
    }

    #[test]
    fn test_short_row_yields_null_times() {
        let layout = ColumnLayout::default();
        let rows = vec![row(&["29.00", "", "", "", "", "", "", "", "", "50 Fly", "28.00"])];
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert_eq!(block.girls[0].scy.a.as_deref(), Some("29.00"));
        assert_eq!(block.boys[0].name, "50 Fly");
        assert_eq!(block.boys[0].scy.a.as_deref(), Some("28.00"));
        assert_eq!(block.boys[0].scm.a, None);
        assert_eq!(block.boys[0].lcm.b, None);
    }

    #[test]
    fn test_row_without_label_column_is_noise() {
        let layout = ColumnLayout::default();
        let rows = vec![row(&["29.00", "30.00"]), Vec::new()];
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert!(block.girls.is_empty());
        assert_eq!(block.next_index, 2);
    }

    #[test]
    fn test_start_past_end() {
        let layout = ColumnLayout::default();
        let rows = vec![header_row("9")];
        let block = extract_event_block(&rows, 2, "9", &layout);
        assert!(block.girls.is_empty());
        assert_eq!(block.next_index, 2);
    }

    #[test]
    fn test_girls_and_boys_stay_aligned() {
        let layout = ColumnLayout::default();
        let rows = vec![
            event_row("50 Free", "30.00"),
            event_row("Event", ""),
            event_row("100 Breast", "1:30.00"),
            event_row("50 Free", "31.00"),
        ];
        let block = extract_event_block(&rows, 0, "9", &layout);
        assert_eq!(block.girls.len(), block.boys.len());
        for (g, b) in block.girls.iter().zip(&block.boys) {
            assert_eq!(g.name, b.name);
        }
        // duplicate names are kept
        assert_eq!(block.girls.len(), 3);
    }
}
