//! Vehicle finance and lease estimators.
//!
//! All math is done in USD on sanitized inputs; conversion to the visitor's
//! currency happens only when results are formatted.

mod finance;
pub(crate) mod inputs;
mod lease;
mod result_formatter;

pub use finance::{calculate_finance, FinanceQuote};
pub use inputs::{
    parse_number, FinanceForm, FinanceInputs, LeaseForm, LeaseInputs, MAX_AMOUNT, MAX_APR,
    MAX_MONEY_FACTOR, MAX_TERM_MONTHS,
};
pub use lease::{calculate_lease, LeaseQuote};
pub use result_formatter::{FinanceView, LeaseView, ResultFormatter};
