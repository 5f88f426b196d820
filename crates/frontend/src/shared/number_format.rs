//! Number and currency formatting for tables and cards

use crate::shared::config::{self, CurrencyConfig};

/// Group the integer digits of `value` (rounded to `decimals`) with `thousands`,
/// joining the fraction with `decimal`.
///
/// ```
/// use frontend::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234.567, 2, ",", "."), "1,234.57");
/// ```
pub fn format_grouped(value: f64, decimals: usize, thousands: &str, decimal: &str) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * thousands.len());
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(thousands);
        }
        grouped.push(*c);
    }

    // "-0.00" is not a thing people want to read
    let is_negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if is_negative { "-" } else { "" };

    match fraction {
        Some(f) => format!("{}{}{}{}", sign, grouped, decimal, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with the configured symbol and exactly two decimals.
///
/// Takes the raw amount only: an already formatted string can't be passed back in.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, &config::get().currency)
}

pub fn format_currency_with(amount: f64, currency: &CurrencyConfig) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let body = format_grouped(amount, 2, &currency.thousands_separator, &currency.decimal_separator);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", currency.symbol, abs),
        None => format!("{}{}", currency.symbol, body),
    }
}

/// Percentage with one decimal, e.g. `65.0%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(80.0), "$80.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn test_format_currency_other_locale() {
        let eur = CurrencyConfig {
            symbol: "€".into(),
            thousands_separator: ".".into(),
            decimal_separator: ",".into(),
        };
        assert_eq!(format_currency_with(1234567.5, &eur), "€1.234.567,50");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234.567, 0, " ", "."), "1 235");
        assert_eq!(format_grouped(999.0, 1, ",", "."), "999.0");
        assert_eq!(format_grouped(100000.0, 0, ",", "."), "100,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(65.0), "65.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }
}
