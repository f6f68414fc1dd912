//! In-memory implementation of RecordService with simulated latency

use crate::core::{DashError, Page, PageRequest, RecordService};
use crate::storage::RecordCollection;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round trip, matching the dashboard's mock fetcher
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Paginated service over a fixed in-memory collection
///
/// Every request waits `latency` on a tokio timer before answering, which
/// stands in for network or database time. The wait suspends only the
/// calling task; concurrent requests sleep independently.
///
/// Dropping an in-flight request future discards its result and has no
/// effect on other callers.
#[derive(Debug, Clone)]
pub struct InMemoryRecordService<T> {
    records: RecordCollection<T>,
    latency: Duration,
}

impl<T> InMemoryRecordService<T> {
    /// Create a service over `records` with the default latency
    pub fn new(records: RecordCollection<T>) -> Self {
        Self {
            records,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Replace the simulated latency; `Duration::ZERO` answers immediately
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn records(&self) -> &RecordCollection<T> {
        &self.records
    }
}

#[async_trait]
impl<T> RecordService<T> for InMemoryRecordService<T>
where
    T: Clone + Send + Sync,
{
    async fn get_page(&self, page_index: usize, page_size: usize) -> Result<Page<T>, DashError> {
        let request = PageRequest::new(page_index, page_size)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let page = Page::from_slice(&self.records, request);

        tracing::debug!(
            page_index,
            page_size,
            returned = page.data.len(),
            page_count = page.page_count,
            total = page.total,
            "Served page"
        );

        Ok(page)
    }

    fn total(&self) -> usize {
        self.records.len()
    }
}
