//! Storage implementations backing the record services

pub mod collection;
pub mod in_memory;

pub use collection::RecordCollection;
pub use in_memory::InMemoryRecordService;
