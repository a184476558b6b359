//! The showroom page: scanned catalog, per-visitor page view, and the
//! service that ties currency resolution to rendering.

mod catalog;
mod page;
mod site_service;

pub use catalog::SiteCatalog;
pub use page::PageView;
pub use site_service::{SiteService, Visitor};
