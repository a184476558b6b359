/// Storage key holding the cached `{ timestamp, rates }` FX table
pub const RATE_CACHE_KEY: &str = "fx_rates_cache";

/// Storage key holding a visitor's chosen currency code
pub const PREFERRED_CURRENCY_KEY: &str = "preferred_currency";

/// Cached FX tables older than this are ignored
pub const RATE_CACHE_TTL_HOURS: i64 = 12;

/// Currencies requested from the FX provider (USD is implicit)
pub const QUOTED_CURRENCIES: &[&str] = &["EUR", "GBP", "AUD", "NGN", "INR", "CAD", "JPY"];

/// Units per 1 USD used until a cached or live table is available
pub const STATIC_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("AUD", 1.52),
    ("NGN", 1550.0),
    ("INR", 83.2),
    ("CAD", 1.36),
    ("JPY", 151.0),
];

/// Trip distance used by the planner when the visitor gives none
pub const TRIP_PLACEHOLDER_DISTANCE_KM: f64 = 500.0;
