/// Receives progress notifications while tables are walked.
///
/// All methods default to no-ops; extraction results never depend on
/// what an observer does.
pub trait ParseObserver {
    fn on_page(&self, _page_number: usize, _table_count: usize) {}

    fn on_age_group_found(&self, _age: &str) {}

    fn on_age_group_extracted(&self, _age: &str, _event_count: usize) {}

    /// A header matched but no event rows followed it.
    fn on_age_group_discarded(&self, _age: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Reports progress through `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn on_page(&self, page_number: usize, table_count: usize) {
        tracing::info!(page = page_number, tables = table_count, "processing page");
    }

    fn on_age_group_found(&self, age: &str) {
        tracing::info!(age, "found age group");
    }

    fn on_age_group_extracted(&self, age: &str, event_count: usize) {
        tracing::info!(age, events = event_count, "extracted events");
    }

    fn on_age_group_discarded(&self, age: &str) {
        tracing::warn!(age, "age group has no events, skipping");
    }
}
