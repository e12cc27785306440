//! Number rendering and legend, tooltip and axis text

use crate::scenario::Scenario;

/// Fixed-point text with `digits` decimals, exact ties rounded away from zero
///
/// Non-tie values are rounded from their exact binary expansion, so 1.005
/// (stored just below 1.005) renders as "1.00".
pub fn to_fixed(value: f64, digits: usize) -> String {
    let halves = value * 2f64.powi(digits as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 != 0.0 {
        // A tie has exactly `digits + 1` decimals, the last one a 5
        let exact = format!("{:.*}", digits + 1, value.abs());
        let rounded = round_half_up(&exact, digits);
        return if value < 0.0 { format!("-{}", rounded) } else { rounded };
    }
    format!("{:.*}", digits, value)
}

/// Round an unsigned plain decimal string half-up to `digits` decimals
fn round_half_up(decimal: &str, digits: usize) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    if frac_part.len() <= digits {
        return decimal.to_string();
    }

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();
    if frac_part.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out: String = kept[..split].iter().map(|&b| b as char).collect();
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    out
}

/// Locale conventions for rendering amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Trailing zeros past the decimal point are dropped
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    /// en-US: "1,234,567.89"
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }
}

impl NumberFormat {
    /// Dot grouping, comma decimals: "1.234.567,89"
    pub fn continental() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
            ..Self::default()
        }
    }

    /// Render with thousands separators
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
        }

        // Shortest round-trip digits, rounded half-up as a decimal
        let fixed = round_half_up(&value.abs().to_string(), self.max_fraction_digits);
        let (int_digits, frac_digits) = match fixed.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, frac_digits.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };

        let mut out = String::with_capacity(fixed.len() + int_digits.len() / 3 + 1);
        let is_zero = int_digits.bytes().all(|b| b == b'0') && frac_digits.is_empty();
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        let len = int_digits.len();
        for (i, digit) in int_digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(digit);
        }
        if !frac_digits.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_digits);
        }
        out
    }

    /// "<Label>: $<total>", or just the label when there is no completed year
    pub fn legend_text(&self, scenario: Scenario, last_annual_value: Option<f64>) -> String {
        match last_annual_value {
            Some(total) => format!("{}: ${}", scenario.label(), self.format(total)),
            None => scenario.label().to_string(),
        }
    }

    /// "<value> <Label>" for the hovered point
    pub fn tooltip_text(&self, scenario: Scenario, value: f64) -> String {
        format!("{} {}", self.format(value), scenario.label())
    }

    /// Tooltip keyed by series name; anything but the investing label reads as saving
    pub fn tooltip_text_for_name(&self, series_name: &str, value: f64) -> String {
        let scenario = match Scenario::from_label(series_name) {
            Some(Scenario::Investing) => Scenario::Investing,
            _ => Scenario::Saving,
        };
        self.tooltip_text(scenario, value)
    }

    /// Y-axis tick label
    pub fn axis_label(&self, value: f64) -> String {
        self.format(value)
    }
}

/// X tooltip: the category itself, empty when absent
pub fn category_tooltip(category: Option<&str>) -> String {
    category.unwrap_or_default().to_string()
}

/// Render with the default (en-US) separators
pub fn format_number(value: f64) -> String {
    NumberFormat::default().format(value)
}

/// Legend text with the default separators
pub fn legend_text(scenario: Scenario, last_annual_value: Option<f64>) -> String {
    NumberFormat::default().legend_text(scenario, last_annual_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
        assert_eq!(to_fixed(1020.1, 3), "1020.100");
        assert_eq!(to_fixed(42.0, 0), "42");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_large_ties() {
        // Cent ties well above 1e14 still round away from zero
        assert_eq!(to_fixed(281_474_976_710_655.125, 2), "281474976710655.13");
        assert_eq!(to_fixed(140_737_488_355_327.375, 2), "140737488355327.38");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up("1.0005", 3), "1.001");
        assert_eq!(round_half_up("9.9995", 3), "10.000");
        assert_eq!(round_half_up("0.5", 0), "1");
        assert_eq!(round_half_up("12.3", 3), "12.3");
        assert_eq!(round_half_up("7", 2), "7");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_number(1_234_567.89), "1,234,567.89");
        assert_eq!(format_number(1_010.0), "1,010");
        assert_eq!(format_number(1_020.1), "1,020.1");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(100_000.0), "100,000");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-1_234.5), "-1,234.5");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_fraction_digit_limit() {
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(2.0004), "2");
        // Shortest digits "1.0005" round up even though the stored value is below
        assert_eq!(format_number(1.0005), "1.001");
        assert_eq!(format_number(999.9995), "1,000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_continental() {
        let fmt = NumberFormat::continental();
        assert_eq!(fmt.format(1_234_567.89), "1.234.567,89");
        assert_eq!(fmt.legend_text(Scenario::Saving, Some(2_500.5)), "Ahorro: $2.500,5");
    }

    #[test]
    fn test_legend_text() {
        assert_eq!(
            legend_text(Scenario::Investing, Some(4_004_656.9)),
            "Inversión: $4,004,656.9"
        );
        assert_eq!(
            legend_text(Scenario::Saving, Some(1_300_522.64)),
            "Ahorro: $1,300,522.64"
        );
        assert_eq!(legend_text(Scenario::Investing, None), "Inversión");
    }

    #[test]
    fn test_tooltips() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.tooltip_text(Scenario::Investing, 42_874.1), "42,874.1 Inversión");
        assert_eq!(fmt.tooltip_text_for_name("Inversión", 10.0), "10 Inversión");
        assert_eq!(fmt.tooltip_text_for_name("Ahorro", 10.0), "10 Ahorro");
        assert_eq!(fmt.tooltip_text_for_name("Other", 10.0), "10 Ahorro");

        assert_eq!(category_tooltip(Some("2030")), "2030");
        assert_eq!(category_tooltip(None), "");
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(NumberFormat::default().axis_label(2_500_000.0), "2,500,000");
    }
}
