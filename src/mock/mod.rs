//! Mock data sources for dashboard development

pub mod generator;

pub use generator::PaymentGenerator;
