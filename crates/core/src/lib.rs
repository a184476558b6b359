//! Showroom Core - pricing, currency selection and estimators.
//!
//! This crate renders the showroom page for a visitor: it picks a display
//! currency, converts USD prices with the active FX snapshot, and computes
//! finance and lease estimates. It is transport-agnostic; persistence goes
//! through the [`storage::KeyValueStore`] trait implemented by the server.

pub mod calculators;
pub mod constants;
pub mod currency;
pub mod errors;
pub mod forms;
pub mod fx;
pub mod pricing;
pub mod site;
pub mod storage;

pub use site::{PageView, SiteCatalog, SiteService, Visitor};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
