//! Currency-adjusted price display.
//!
//! Prices are authored in USD. Rendering multiplies by the effective rate of
//! the selected currency and formats with a precision chosen per entry.

mod money_format;
mod precision;
mod price_model;
mod renderer;

pub use money_format::{currency_symbol, format_money, format_number};
pub use precision::PrecisionRules;
pub use price_model::{parse_display_amount, PriceEntry, RenderedPrice, UnitKind};
pub use renderer::PriceRenderer;
