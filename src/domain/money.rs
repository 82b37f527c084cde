use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a plain non-negative decimal amount")]
pub struct ParseAmountError(pub String);

/// A non-negative monetary amount with exact decimal precision.
///
/// Only the plain textual form is accepted: digits, optionally followed by a
/// dot and more digits (`"6.49"`, `"12"`, `"0.5"`). Signs, exponents,
/// whitespace and currency symbols are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when the amount has no cents.
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        !step.is_zero() && (self.0 % step).is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Sums amounts exactly, or `None` once the sum leaves `Decimal`'s range.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, Self::checked_add)
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_plain_decimal(s) {
            return Err(ParseAmountError(s.to_string()));
        }
        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|_| ParseAmountError(s.to_string()))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!("6.49".parse::<Amount>().unwrap().value(), dec!(6.49));
        assert_eq!("12".parse::<Amount>().unwrap().value(), dec!(12));
        assert_eq!("0.00".parse::<Amount>().unwrap().value(), dec!(0));
        assert_eq!("007.10".parse::<Amount>().unwrap().value(), dec!(7.1));
    }

    #[test]
    fn test_reject_non_plain_amounts() {
        for input in [
            "", "-1.00", "+1.00", "$4.99", "1e3", " 1.00", "1.00 ", "1.", ".5", "1.2.3", "1,000.00",
            "abc", "NaN",
        ] {
            assert!(
                input.parse::<Amount>().is_err(),
                "'{input}' should not parse as an amount"
            );
        }
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 + 0.2 is the classic binary float trap
        let parts: Vec<Amount> = ["0.10", "0.20"].iter().map(|s| s.parse().unwrap()).collect();
        let total = Amount::checked_sum(parts).unwrap();
        assert_eq!(total, "0.3".parse().unwrap());
    }

    #[test]
    fn test_sum_reports_overflow() {
        let big: Amount = "50000000000000000000000000000".parse().unwrap();
        assert_eq!(Amount::checked_sum([big, big]), None);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(Amount::checked_sum([big, Amount::ZERO]), Some(big));
        assert_eq!(Amount::checked_sum([]), Some(Amount::ZERO));
    }

    #[test]
    fn test_whole_and_quarter_checks() {
        let hundred: Amount = "100.00".parse().unwrap();
        assert!(hundred.is_whole());
        assert!(hundred.is_multiple_of(dec!(0.25)));

        let quarter: Amount = "9.75".parse().unwrap();
        assert!(!quarter.is_whole());
        assert!(quarter.is_multiple_of(dec!(0.25)));

        let odd: Amount = "35.35".parse().unwrap();
        assert!(!odd.is_whole());
        assert!(!odd.is_multiple_of(dec!(0.25)));

        assert!(!odd.is_multiple_of(Decimal::ZERO));
    }
}
