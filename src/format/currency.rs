//! Currency formatting for journal listings

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

use crate::traits::CurrencyFormatter;

/// Currency display settings
///
/// Defaults to euros written the French way: `1 234,56 €`, with a narrow
/// no-break space between digit groups and a no-break space before the symbol.
/// Amounts are rounded half away from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol
    pub symbol: String,
    /// Separator between whole and fractional digits
    pub decimal_separator: char,
    /// Separator between groups of three whole digits
    pub group_separator: char,
    /// Digits kept after the decimal separator
    pub decimal_places: u32,
    /// Write the symbol after the amount instead of before it
    pub symbol_after: bool,
}

impl CurrencyFormat {
    /// French euro format
    pub fn euro() -> Self {
        Self {
            symbol: "€".to_string(),
            decimal_separator: ',',
            group_separator: '\u{202f}',
            decimal_places: 2,
            symbol_after: true,
        }
    }

    fn group_digits(&self, whole: &str) -> String {
        let mut grouped = String::new();
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::euro()
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(&self, amount: &BigDecimal) -> String {
        let places = i64::from(self.decimal_places);
        let rounded = amount.with_scale_round(places, RoundingMode::HalfUp);
        let negative = rounded < BigDecimal::from(0);

        // with_scale_round fixes the exponent, so the integer part is the amount in minor units
        let (minor_units, _) = rounded.abs().as_bigint_and_exponent();
        let fraction_len = self.decimal_places as usize;
        let digits = format!(
            "{:0>width$}",
            minor_units.to_string(),
            width = fraction_len + 1
        );
        let (whole, fraction) = digits.split_at(digits.len() - fraction_len);

        let mut number = self.group_digits(whole);
        if !fraction.is_empty() {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        if self.symbol_after {
            format!("{sign}{number}\u{a0}{}", self.symbol)
        } else {
            format!("{sign}{}{number}", self.symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_euro_format() {
        let euro = CurrencyFormat::default();

        assert_eq!(euro.format(&amount("1234.5")), "1\u{202f}234,50\u{a0}€");
        assert_eq!(euro.format(&amount("120")), "120,00\u{a0}€");
        assert_eq!(euro.format(&amount("0")), "0,00\u{a0}€");
        assert_eq!(euro.format(&amount("0.07")), "0,07\u{a0}€");
    }

    #[test]
    fn test_negative_and_large_amounts() {
        let euro = CurrencyFormat::euro();

        assert_eq!(
            euro.format(&amount("-1234567.89")),
            "-1\u{202f}234\u{202f}567,89\u{a0}€"
        );
        assert_eq!(euro.format(&amount("999999")), "999\u{202f}999,00\u{a0}€");
    }

    #[test]
    fn test_rounds_to_decimal_places() {
        let euro = CurrencyFormat::euro();

        assert_eq!(euro.format(&amount("2.349")), "2,35\u{a0}€");
        assert_eq!(euro.format(&amount("19.991")), "19,99\u{a0}€");
    }

    #[test]
    fn test_midpoints_round_away_from_zero() {
        let euro = CurrencyFormat::euro();

        assert_eq!(euro.format(&amount("0.125")), "0,13\u{a0}€");
        assert_eq!(euro.format(&amount("2.345")), "2,35\u{a0}€");
        assert_eq!(euro.format(&amount("-0.005")), "-0,01\u{a0}€");
    }

    #[test]
    fn test_symbol_before_amount() {
        let dollars = CurrencyFormat {
            symbol: "$".to_string(),
            decimal_separator: '.',
            group_separator: ',',
            decimal_places: 2,
            symbol_after: false,
        };

        assert_eq!(dollars.format(&amount("1234.5")), "$1,234.50");
        assert_eq!(dollars.format(&amount("-5")), "-$5.00");
    }

    #[test]
    fn test_zero_decimal_places() {
        let yen = CurrencyFormat {
            symbol: "¥".to_string(),
            decimal_places: 0,
            symbol_after: false,
            ..CurrencyFormat::euro()
        };

        assert_eq!(yen.format(&amount("1500")), "¥1\u{202f}500");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let format: CurrencyFormat =
            serde_json::from_str(r#"{ "symbol": "CHF", "symbol_after": false }"#).unwrap();

        assert_eq!(format.decimal_places, 2);
        assert_eq!(format.decimal_separator, ',');
        assert_eq!(format.format(&amount("3")), "CHF3,00");
    }
}
