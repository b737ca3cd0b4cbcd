use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};

use super::InvalidFormat;
use crate::bytesrepr::{self, FromBytes, ToBytes, U64_SERIALIZED_LENGTH};

/// A number of tokens, in the smallest indivisible unit of the ledger.
///
/// Encodes as 8 big-endian bytes; the canonical text form is decimal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Amount(u64);

impl Amount {
    /// The maximum value of `Amount`.
    pub const MAX: Amount = Amount(u64::MAX);

    /// Constructs a new `Amount`.
    pub const fn new(value: u64) -> Self {
        Amount(value)
    }

    /// Constructs a new `Amount` with value `0`.
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Returns the inner `u64` value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Checked integer addition. Computes `self + rhs`, returning `None` if overflow occurred.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Checked integer subtraction. Computes `self - rhs`, returning `None` if underflow occurred.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Parses the decimal text form of an amount.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        input
            .parse::<u64>()
            .map(Amount)
            .map_err(|_| InvalidFormat::InvalidInteger)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl ToBytes for Amount {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        U64_SERIALIZED_LENGTH
    }
}

impl FromBytes for Amount {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (value, remainder) = u64::from_bytes(bytes)?;
        Ok((Amount(value), remainder))
    }
}

impl Distribution<Amount> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Amount {
        Amount(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::*;

    #[test]
    fn should_parse_decimal_text_form() {
        assert_eq!(Amount::from_formatted_str("0").unwrap(), Amount::zero());
        assert_eq!(
            Amount::from_formatted_str("18446744073709551615").unwrap(),
            Amount::MAX
        );
        assert_eq!(
            Amount::from_formatted_str("-1"),
            Err(InvalidFormat::InvalidInteger)
        );
        assert_eq!(
            Amount::from_formatted_str("1.5"),
            Err(InvalidFormat::InvalidInteger)
        );
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(
            Amount::new(1).checked_add(Amount::new(2)),
            Some(Amount::new(3))
        );
        assert_eq!(Amount::MAX.checked_add(Amount::new(1)), None);
        assert_eq!(Amount::zero().checked_sub(Amount::new(1)), None);
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&Amount::zero());
        bytesrepr::test_serialization_roundtrip(&Amount::MAX);
    }

    #[test]
    fn serde_tokens() {
        assert_tokens(
            &Amount::new(42),
            &[Token::NewtypeStruct { name: "Amount" }, Token::U64(42)],
        );
    }
}
