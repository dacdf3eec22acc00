//! Arbitrary-precision integers.
//!
//! Checkers only compare bigints, never compute with them, so the value is
//! kept in canonical decimal form and compared as text.

use crate::error::ValueError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An arbitrary-precision integer in canonical decimal form: an optional `-`
/// followed by digits without leading zeros. Zero is never negative.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt(Arc<str>);

impl BigInt {
    /// Parse a decimal integer literal such as `"-42"` or `"007"`.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidBigInt(text.to_string()));
        }

        let significant = digits.trim_start_matches('0');
        let canonical = if significant.is_empty() {
            "0".to_string()
        } else if negative {
            format!("-{}", significant)
        } else {
            significant.to_string()
        };
        Ok(Self(canonical.into()))
    }

    /// The canonical decimal digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        &*self.0 == "0"
    }
}

impl FromStr for BigInt {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

macro_rules! bigint_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> Self {
                    // Integer Display output is already canonical.
                    Self(value.to_string().into())
                }
            }
        )*
    };
}

bigint_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}n", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonicalizes() {
        assert_eq!(BigInt::parse("007").unwrap().as_str(), "7");
        assert_eq!(BigInt::parse("-0").unwrap().as_str(), "0");
        assert_eq!(BigInt::parse("-000").unwrap().as_str(), "0");
        assert_eq!(BigInt::parse("-120").unwrap().as_str(), "-120");
        assert!(BigInt::parse("-120").unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BigInt::parse("").is_err());
        assert!(BigInt::parse("-").is_err());
        assert!(BigInt::parse("1.5").is_err());
        assert!(BigInt::parse("+1").is_err());
        assert_eq!(
            BigInt::parse("12a"),
            Err(ValueError::InvalidBigInt("12a".to_string()))
        );
    }

    #[test]
    fn test_from_int_matches_parse() {
        assert_eq!(BigInt::from(-5i64), BigInt::parse("-5").unwrap());
        assert_eq!(BigInt::from(u128::MAX).as_str(), u128::MAX.to_string());
        assert!(BigInt::from(0u8).is_zero());
    }

    #[test]
    fn test_huge_literal() {
        let text = "123456789012345678901234567890123456789012345678901234567890";
        let big: BigInt = text.parse().unwrap();
        assert_eq!(big.to_string(), text);
        assert_eq!(format!("{:?}", big), format!("{}n", text));
    }
}
