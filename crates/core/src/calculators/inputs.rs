use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Coerce a form value to a number. Blank or non-numeric text is 0.
///
/// Surrounding whitespace and `,` grouping separators are ignored.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Accepts a JSON number, a numeric string, or null.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_number(deserializer)?.unwrap_or(0.0))
}

/// Like [`lenient_number`] but keeps "no value" distinct from zero.
pub(crate) fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => Some(n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0)),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(parse_number(&s)),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Largest money amount the estimators accept; larger inputs are capped.
pub const MAX_AMOUNT: f64 = 1.0e12;
/// Largest APR, in percent.
pub const MAX_APR: f64 = 1000.0;
/// Largest money factor (an APR of 2400%).
pub const MAX_MONEY_FACTOR: f64 = 1.0;
/// Longest term, in months.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Clamps to `[0, max]`; non-finite values become 0.
fn bounded(value: f64, max: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.min(max)
    } else {
        0.0
    }
}

fn amount(value: f64) -> f64 {
    bounded(value, MAX_AMOUNT)
}

fn term_months(value: f64) -> u32 {
    let value = if value.is_finite() { value } else { 0.0 };
    value.round().clamp(1.0, f64::from(MAX_TERM_MONTHS)) as u32
}

/// Raw finance estimator fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceForm {
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub down_payment: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub trade_in: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub term_months: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub apr: f64,
}

/// Finance inputs with every invariant applied: amounts and APR are
/// non-negative and bounded, and the term is between one and
/// [`MAX_TERM_MONTHS`] months.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceInputs {
    pub price: f64,
    pub down_payment: f64,
    pub trade_in: f64,
    pub term_months: u32,
    pub apr: f64,
}

impl From<&FinanceForm> for FinanceInputs {
    fn from(form: &FinanceForm) -> Self {
        Self {
            price: amount(form.price),
            down_payment: amount(form.down_payment),
            trade_in: amount(form.trade_in),
            term_months: term_months(form.term_months),
            apr: bounded(form.apr, MAX_APR),
        }
    }
}

impl From<FinanceForm> for FinanceInputs {
    fn from(form: FinanceForm) -> Self {
        Self::from(&form)
    }
}

/// Raw lease estimator fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaseForm {
    #[serde(deserialize_with = "lenient_number")]
    pub msrp: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub residual_percent: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub money_factor: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub term_months: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub drive_off: f64,
}

/// Lease inputs with every invariant applied; residual is within `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseInputs {
    pub msrp: f64,
    pub residual_percent: f64,
    pub money_factor: f64,
    pub term_months: u32,
    pub drive_off: f64,
}

impl From<&LeaseForm> for LeaseInputs {
    fn from(form: &LeaseForm) -> Self {
        Self {
            msrp: amount(form.msrp),
            residual_percent: bounded(form.residual_percent, 100.0),
            money_factor: bounded(form.money_factor, MAX_MONEY_FACTOR),
            term_months: term_months(form.term_months),
            drive_off: amount(form.drive_off),
        }
    }
}

impl From<LeaseForm> for LeaseInputs {
    fn from(form: LeaseForm) -> Self {
        Self::from(&form)
    }
}
