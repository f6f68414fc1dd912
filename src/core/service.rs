//! Service trait for paginated record access

use crate::core::error::DashError;
use crate::core::query::Page;
use async_trait::async_trait;

/// Read-only, page-windowed access to a fixed record collection
///
/// Implementations never mutate the backing collection, so any number of
/// callers may query concurrently.
#[async_trait]
pub trait RecordService<T>: Send + Sync {
    /// Get the records of page `page_index` for pages of `page_size` records
    ///
    /// Fails with an invalid-argument error when `page_size` is zero. A page
    /// past the end is an empty, successful result.
    async fn get_page(&self, page_index: usize, page_size: usize) -> Result<Page<T>, DashError>;

    /// Number of records in the backing collection
    fn total(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRecordService;
    use std::time::Duration;

    async fn first_page<T>(service: &dyn RecordService<T>) -> Result<Page<T>, DashError> {
        service.get_page(0, 10).await
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let service =
            InMemoryRecordService::new((0..25u32).collect()).with_latency(Duration::ZERO);

        let page = first_page::<u32>(&service).await.unwrap();
        assert_eq!(page.data, (0..10).collect::<Vec<_>>());
        assert_eq!(page.page_count, 3);
        assert_eq!(service.total(), 25);
    }
}
