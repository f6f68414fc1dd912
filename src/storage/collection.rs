//! Immutable backing collection for paginated services

use std::ops::Deref;
use std::sync::Arc;

/// A fixed-length, read-only sequence of records
///
/// Built once at startup and shared by handle: cloning a collection clones
/// the `Arc`, never the records. There is no way to push, remove or
/// reorder records after construction.
#[derive(Debug)]
pub struct RecordCollection<T> {
    records: Arc<[T]>,
}

impl<T> RecordCollection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

impl<T> Clone for RecordCollection<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Deref for RecordCollection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

impl<T> From<Vec<T>> for RecordCollection<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<T> for RecordCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
