//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) to avoid
//! floating-point precision issues. Arithmetic saturates at the i64 bounds
//! instead of overflowing. Provides lenient parsing and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols stripped from amounts before parsing
const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use student_budget::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use student_budget::models::Money;
    /// assert_eq!(Money::from_units(150).cents(), 15000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Approximate value as a float, for charts and percentages
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10", "₹1,200.50", "$10.5", ".75",
    /// and scientific notation as spreadsheets export it ("1.5E3").
    /// Digits past the second fractional place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let s = s.trim_start_matches(CURRENCY_SYMBOLS).trim();
        let s: String = s.chars().filter(|c| *c != ',').collect();

        let (mantissa, exponent) = match s.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                (mantissa, exponent.parse::<i64>().map_err(|_| invalid())?)
            }
            None => (s.as_str(), 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        // Move the decimal point so that every digit left of it counts hundredths
        let digits = format!("{}{}", whole, fraction);
        let significant = digits.trim_start_matches('0');
        let point = whole.len() as i64 - (digits.len() - significant.len()) as i64;
        let keep = point.saturating_add(exponent).saturating_add(2);

        let total: i64 = if significant.is_empty() || keep <= 0 {
            0
        } else if keep > 19 {
            // At least 10^19 hundredths
            return Err(invalid());
        } else {
            let keep = keep as usize;
            let mut scaled: String = significant.chars().take(keep).collect();
            while scaled.len() < keep {
                scaled.push('0');
            }
            scaled.parse().map_err(|_| invalid())?
        };

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol, e.g. "-₹10.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }

    /// Format whole units with thousands separators, e.g. "₹12,500"
    ///
    /// Fractions are rounded half away from zero.
    pub fn format_grouped(&self, symbol: &str) -> String {
        let rounded = (self.0.abs() + 50) / 100;
        let digits = rounded.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.is_negative() && rounded > 0 { "-" } else { "" };
        format!("{}{}{}", sign, symbol, grouped)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal form, as written to CSV files ("-100.00")
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "'{}' is not a valid amount", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
