//! # paydash
//!
//! Paginated mock payment records for admin dashboard development.
//!
//! ## Features
//!
//! - **Explicit backing collection**: generated once at startup from an
//!   injectable random source, then shared read-only
//! - **Page-windowed queries**: zero-based pages with total and page count
//! - **Simulated latency**: a non-blocking, configurable delay per request
//! - **REST exposure**: `GET /payments?pageIndex=&pageSize=` over Axum
//! - **YAML configuration**: every setting optional, with defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paydash::prelude::*;
//!
//! let generator = PaymentGenerator::new(GeneratorConfig::default())?;
//! let payments = generator.generate(500, &mut StdRng::seed_from_u64(42), Utc::now());
//!
//! let service = InMemoryRecordService::new(payments)
//!     .with_latency(Duration::from_millis(500));
//!
//! let page = service.get_page(0, 50).await?;
//! assert_eq!(page.data.len(), 50);
//! assert_eq!(page.page_count, 10);
//! assert_eq!(page.total, 500);
//! ```

pub mod config;
pub mod core;
pub mod mock;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, DashError, ErrorResponse, Page, PageQuery, PageRequest, Payment,
        PaymentStatus, RecordService, ValidationError,
    };

    // === Mock data ===
    pub use crate::mock::PaymentGenerator;

    // === Storage ===
    pub use crate::storage::{InMemoryRecordService, RecordCollection};

    // === Config ===
    pub use crate::config::{DashboardConfig, GeneratorConfig, ServerConfig, ServiceConfig};

    // === Server ===
    pub use crate::server::{PaymentsState, RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use rand::SeedableRng;
    pub use rand::rngs::StdRng;
    pub use std::time::Duration;
}
