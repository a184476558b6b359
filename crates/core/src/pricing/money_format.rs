use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale a `Decimal` can carry
const MAX_DECIMALS: u32 = 28;

/// Display symbol for a currency code, if the site knows one.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "AUD" => Some("A$"),
        "NGN" => Some("₦"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Format `amount` with `,` grouping, `.` decimals and exactly `decimals`
/// fraction digits, rounding half away from zero. Non-finite input is 0.
pub fn format_number(amount: f64, decimals: u32) -> String {
    let rounded = round_half_away(amount, decimals);
    let (negative, digits) = match rounded.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rounded.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a money amount in `currency`, e.g. `€1,234.50` or `CHF 1,234`.
/// The sign precedes the symbol.
pub fn format_money(amount: f64, currency: &str, decimals: u32) -> String {
    let number = format_number(amount, decimals);
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{currency} {digits}"),
    }
}

fn round_half_away(amount: f64, decimals: u32) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let decimals = decimals.min(MAX_DECIMALS);
    match Decimal::from_f64_retain(amount) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            if rounded.is_zero() {
                rounded.set_sign_positive(true);
            }
            rounded.to_string()
        }
        // Outside Decimal's range; fall back to float formatting.
        None => format!("{:.*}", decimals as usize, amount),
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
