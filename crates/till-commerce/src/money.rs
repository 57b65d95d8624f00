//! Money type for representing monetary values.
//!
//! Uses an integer count of the currency's minor unit so bill totals never
//! drift the way summed floating-point prices do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unknown currency code: {}", s.trim()))
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// Parse the leading decimal number of a text field.
///
/// Mirrors how a browser number field is read: leading whitespace is skipped,
/// the longest `[+-]digits[.digits][e[+-]digits]` prefix is taken and the
/// rest of the text is ignored. Returns `None` when there is no numeric
/// prefix or the value is not finite.
///
/// ```
/// use till_commerce::parse_decimal;
/// assert_eq!(parse_decimal(" 12.5kg"), Some(12.5));
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if end < b.len() && (b[end] == b'+' || b[end] == b'-') {
        end += 1;
    }
    let int_end = digits_from(end);
    let int_digits = int_end - end;
    end = int_end;

    let mut frac_digits = 0;
    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        frac_digits = frac_end - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = frac_end;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut exp = end + 1;
        if exp < b.len() && (b[exp] == b'+' || b[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding half away from
    /// zero to the currency's minor unit.
    ///
    /// ```
    /// use till_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(45.5, Currency::INR).unwrap();
    /// assert_eq!(price.amount_minor, 4550);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = (amount * currency.minor_per_major() as f64).round();
        if scaled.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(scaled as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Format as a display string (e.g., "₹49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major() as u64;
        let abs = self.amount_minor.unsigned_abs();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return format!("{}{}", sign, abs);
        }
        format!(
            "{}{}.{:0places$}",
            sign,
            abs / per_major,
            abs % per_major,
            places = places
        )
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on overflow or
    /// currency mismatch.
    pub fn try_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.fold(Some(Money::zero(currency)), |acc, m| acc?.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999, Currency::INR);
        assert_eq!(m.amount_minor, 4999);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::INR).unwrap();
        assert_eq!(m.amount_minor, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY).unwrap();
        assert_eq!(m.amount_minor, 100);

        assert!(Money::from_decimal(f64::NAN, Currency::INR).is_none());
        assert!(Money::from_decimal(1e300, Currency::INR).is_none());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(6000, Currency::INR).display(), "\u{20b9}60.00");
        assert_eq!(Money::new(4550, Currency::INR).display_amount(), "45.50");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-250, Currency::USD).display_amount(), "-2.50");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_money_multiply_and_sum() {
        let price = Money::new(6000, Currency::INR);
        let line = price.try_multiply(2).unwrap();
        assert_eq!(line.amount_minor, 12000);

        let items = [line, Money::new(4550, Currency::INR)];
        let total = Money::try_sum(items.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount_minor, 16550);
    }

    #[test]
    fn test_money_overflow() {
        let big = Money::new(i64::MAX, Currency::INR);
        assert!(big.try_multiply(2).is_none());
        assert!(big.try_add(&Money::new(1, Currency::INR)).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let inr = Money::new(1000, Currency::INR);
        let eur = Money::new(1000, Currency::EUR);
        assert!(inr.try_add(&eur).is_none());
    }

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(parse_decimal("90"), Some(90.0));
        assert_eq!(parse_decimal("  45.50"), Some(45.5));
        assert_eq!(parse_decimal("12abc"), Some(12.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("-3"), Some(-3.0));
        assert_eq!(parse_decimal("1e2x"), Some(100.0));
        assert_eq!(parse_decimal("1e"), Some(1.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("-"), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
        assert_eq!(" usd ".parse::<Currency>(), Ok(Currency::USD));
    }

    #[test]
    fn test_currency_serde_accepts_any_case() {
        let currency: Currency = serde_json::from_str(r#""inr""#).unwrap();
        assert_eq!(currency, Currency::INR);
        assert_eq!(serde_json::to_string(&Currency::GBP).unwrap(), r#""GBP""#);
        assert!(serde_json::from_str::<Currency>(r#""XYZ""#).is_err());

        let money: Money = serde_json::from_str(r#"{"amount_minor": 4550, "currency": "Inr"}"#).unwrap();
        assert_eq!(money, Money::new(4550, Currency::INR));
    }
}
