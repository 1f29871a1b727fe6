//! Number formatting for display and export.
//!
//! Only used when rendering. Stored results are never rounded.

use serde::{Deserialize, Serialize};

/// Thousands grouping style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,56,789 (lakh / crore)
    #[default]
    Indian,
    /// 123,456,789
    Western,
}

/// Insert `,` separators into a string of ASCII digits
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    // Группируем голову справа налево
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Round half away from zero to `decimals` places.
/// Values too large to scale already have no fraction digits and are returned as is.
fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Split into (negative, grouped integer part, fraction part without trailing zeros)
fn split_rounded(value: f64, decimals: u8, grouping: Grouping) -> (bool, String, String) {
    let rounded = round_to(value, decimals);
    let formatted = format!("{:.prec$}", rounded.abs(), prec = decimals as usize);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };
    (
        rounded.is_sign_negative(),
        group_digits(int_part, grouping),
        frac_part.to_string(),
    )
}

/// Plain number, `en-US` style, with at most `max_decimals` fraction digits
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(1234.56, 1), "1,234.6");
/// assert_eq!(format_number(1100.0, 1), "1,100");
/// ```
pub fn format_number(value: f64, max_decimals: u8) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (negative, int_part, frac_part) = split_rounded(value, max_decimals, Grouping::Western);
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Currency amount with no fraction digits
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::{format_currency, Grouping};
/// assert_eq!(format_currency(1000000.0, "₹", Grouping::Indian), "₹10,00,000");
/// ```
pub fn format_currency(value: f64, symbol: &str, grouping: Grouping) -> String {
    if value.is_nan() {
        return format!("{}NaN", symbol);
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{}{}∞", sign, symbol);
    }

    let (negative, int_part, _) = split_rounded(value, 0, grouping);
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}", sign, symbol, int_part)
}

/// Unformatted number as written into CSV cells.
///
/// Shortest round-trip representation. Magnitudes from 1e21 up and below
/// 1e-6 use exponent form (`1e+21`, `1.5e-7`); non-finite values are
/// spelled `Infinity`, `-Infinity` and `NaN`.
pub fn format_raw_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", Grouping::Indian), "0");
        assert_eq!(group_digits("999", Grouping::Indian), "999");
        assert_eq!(group_digits("1000", Grouping::Indian), "1,000");
        assert_eq!(group_digits("100000", Grouping::Indian), "1,00,000");
        assert_eq!(group_digits("1000000", Grouping::Indian), "10,00,000");
        assert_eq!(group_digits("123456789", Grouping::Indian), "12,34,56,789");
        assert_eq!(group_digits("1000000", Grouping::Western), "1,000,000");
        assert_eq!(group_digits("123456789", Grouping::Western), "123,456,789");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 1), "0");
        assert_eq!(format_number(1000.0, 1), "1,000");
        assert_eq!(format_number(1100.0000000000002, 1), "1,100");
        assert_eq!(format_number(1234.56, 1), "1,234.6");
        assert_eq!(format_number(12.25, 1), "12.3");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(2.04, 1), "2");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY, 1), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, 1), "-∞");
        assert_eq!(format_number(f64::NAN, 1), "NaN");
    }

    #[test]
    fn test_format_number_near_f64_max() {
        let huge = format_number(1.0e308, 1);
        assert!(huge.starts_with("100,000,000"), "got {}", huge);
        assert!(!huge.contains("inf"));
        assert!(!huge.contains('.'));

        let negative = format_number(-1.0e308, 1);
        assert!(negative.starts_with("-100,000,000"), "got {}", negative);

        let money = format_currency(f64::MAX, "₹", Grouping::Indian);
        assert!(money.starts_with("₹17,97,69"), "got {}", money);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "₹", Grouping::Indian), "₹0");
        assert_eq!(format_currency(200000.0, "₹", Grouping::Indian), "₹2,00,000");
        assert_eq!(format_currency(1234.5, "₹", Grouping::Indian), "₹1,235");
        assert_eq!(format_currency(-1500.0, "₹", Grouping::Indian), "-₹1,500");
        assert_eq!(format_currency(1000000.0, "$", Grouping::Western), "$1,000,000");
        assert_eq!(format_currency(f64::INFINITY, "₹", Grouping::Indian), "₹∞");
        assert_eq!(format_currency(f64::NAN, "₹", Grouping::Indian), "₹NaN");
    }

    #[test]
    fn test_format_raw_number() {
        assert_eq!(format_raw_number(1000.0), "1000");
        assert_eq!(format_raw_number(40.5), "40.5");
        assert_eq!(format_raw_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_raw_number(-0.0), "0");
        assert_eq!(format_raw_number(f64::INFINITY), "Infinity");
        assert_eq!(format_raw_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_raw_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_raw_number_exponent_form() {
        assert_eq!(format_raw_number(1e21), "1e+21");
        assert_eq!(format_raw_number(1.5e300), "1.5e+300");
        assert_eq!(format_raw_number(-2e22), "-2e+22");
        assert_eq!(format_raw_number(1.5e-7), "1.5e-7");
        assert_eq!(format_raw_number(1e20), "100000000000000000000");
        assert_eq!(format_raw_number(0.000001), "0.000001");
    }
}
