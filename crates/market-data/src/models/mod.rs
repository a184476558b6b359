//! Market data models
//!
//! This module contains the core data types shared by providers and resolvers:
//! - `types` - Type aliases for common identifiers (Currency)
//! - `rates` - USD-based exchange-rate table (RateTable)
//! - `geo` - Geolocation lookup result (GeoLocation)
//! - `region` - Request context for currency resolution (RegionContext)

mod geo;
mod rates;
mod region;
mod types;

pub use geo::GeoLocation;
pub use rates::RateTable;
pub use region::RegionContext;
pub use types::{Currency, BASE_CURRENCY};
