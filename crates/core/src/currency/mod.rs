//! Currency preference persistence and selection.

mod preference;
mod selector;

pub use preference::CurrencyPreference;
pub use selector::{normalize_currency_code, select_currency, toggle_states, CurrencyToggle};
