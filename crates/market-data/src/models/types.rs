use std::borrow::Cow;

/// Currency code (ISO 4217) - mostly static
pub type Currency = Cow<'static, str>;

/// Every rate table is expressed as units of currency per 1 unit of this code.
pub const BASE_CURRENCY: &str = "USD";
