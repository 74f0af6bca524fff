pub mod events;
pub mod header;

use crate::extraction::{Cell, PageTables, Row};
use crate::layout::ColumnLayout;
use crate::model::{AgeGroup, GenderBucket, Genders};
use crate::observer::ParseObserver;
use events::extract_event_block;
use header::detect_age_group;

/// Text of a cell, or `None` when the cell is empty or past the end of the row.
pub(crate) fn cell(row: &[Cell], index: usize) -> Option<&str> {
    row.get(index).and_then(|c| c.as_deref())
}

/// Walk every table of every page and collect age groups in discovery order.
///
/// Tables are walked independently; an age group never spans two tables.
/// Labels are not deduplicated, so a label repeated in the source appears
/// more than once.
pub fn parse_pages(
    pages: &[PageTables],
    layout: &ColumnLayout,
    observer: &dyn ParseObserver,
) -> Vec<AgeGroup> {
    let mut age_groups = Vec::new();

    for page in pages {
        observer.on_page(page.page_number, page.tables.len());
        for (t, table) in page.tables.iter().enumerate() {
            tracing::debug!(page = page.page_number, table = t, rows = table.len(), "walking table");
            age_groups.extend(walk_table(table, layout, observer));
        }
    }

    age_groups
}

/// Walk a single table top to bottom.
pub fn walk_table(
    rows: &[Row],
    layout: &ColumnLayout,
    observer: &dyn ParseObserver,
) -> Vec<AgeGroup> {
    let walker = TableWalker {
        rows,
        layout,
        observer,
    };

    let mut age_groups = Vec::new();
    let mut state = WalkState::Scanning { index: 0 };

    while state != WalkState::Done {
        let (next, emitted) = walker.step(state);
        age_groups.extend(emitted);
        state = next;
    }

    age_groups
}

/// Position of the walker within a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalkState {
    /// Looking for an age-group header at `index`.
    Scanning { index: usize },
    /// Row `index` is the header of `age`.
    HeaderFound { index: usize, age: String },
    /// Event rows of `age` start at `start`.
    Consuming { start: usize, age: String },
    Done,
}

struct TableWalker<'a> {
    rows: &'a [Row],
    layout: &'a ColumnLayout,
    observer: &'a dyn ParseObserver,
}

impl TableWalker<'_> {
    /// Advance one transition, returning the next state and any completed age group.
    fn step(&self, state: WalkState) -> (WalkState, Option<AgeGroup>) {
        match state {
            WalkState::Scanning { index } => match self.rows.get(index) {
                None => (WalkState::Done, None),
                Some(row) => match detect_age_group(row, self.layout) {
                    Some(age) => (WalkState::HeaderFound { index, age }, None),
                    None => (WalkState::Scanning { index: index + 1 }, None),
                },
            },
            WalkState::HeaderFound { index, age } => {
                self.observer.on_age_group_found(&age);
                let start = index.saturating_add(self.layout.header_row_span);
                (WalkState::Consuming { start, age }, None)
            }
            WalkState::Consuming { start, age } => {
                let block = extract_event_block(self.rows, start, &age, self.layout);
                let next = WalkState::Scanning {
                    index: block.next_index,
                };

                if block.girls.is_empty() {
                    self.observer.on_age_group_discarded(&age);
                    return (next, None);
                }

                self.observer.on_age_group_extracted(&age, block.girls.len());
                let group = AgeGroup {
                    age,
                    genders: Genders {
                        girls: GenderBucket {
                            events: block.girls,
                        },
                        boys: GenderBucket {
                            events: block.boys,
                        },
                    },
                };
                (next, Some(group))
            }
            WalkState::Done => (WalkState::Done, None),
        }
    }
}
