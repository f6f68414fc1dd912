//! HTTP server exposing the paginated payment service

pub mod builder;
pub mod rest;

pub use builder::ServerBuilder;
pub use rest::{PaymentsState, RestExposure};
