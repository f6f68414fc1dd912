//! Core types: records, pagination, errors and the service trait

pub mod error;
pub mod query;
pub mod record;
pub mod service;

pub use error::{ConfigError, DashError, ErrorResponse, ValidationError};
pub use query::{Page, PageQuery, PageRequest};
pub use record::{Payment, PaymentStatus};
pub use service::RecordService;
