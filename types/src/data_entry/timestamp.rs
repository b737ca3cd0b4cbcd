use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};

use super::InvalidFormat;
use crate::bytesrepr::{self, FromBytes, ToBytes, I64_SERIALIZED_LENGTH};

/// A point in time, as nanoseconds since the Unix epoch.
///
/// Encodes as 8 big-endian bytes; the canonical text form is decimal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Constructs a new `Timestamp` from nanoseconds since the Unix epoch.
    pub const fn from_nanos(nanos: i64) -> Self {
        Timestamp(nanos)
    }

    /// Returns the number of nanoseconds since the Unix epoch.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parses the decimal text form of a timestamp.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        input
            .parse::<i64>()
            .map(Timestamp)
            .map_err(|_| InvalidFormat::InvalidInteger)
    }
}

impl Display for Timestamp {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(nanos: i64) -> Self {
        Timestamp(nanos)
    }
}

impl ToBytes for Timestamp {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        I64_SERIALIZED_LENGTH
    }
}

impl FromBytes for Timestamp {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (nanos, remainder) = i64::from_bytes(bytes)?;
        Ok((Timestamp(nanos), remainder))
    }
}

impl Distribution<Timestamp> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Timestamp {
        Timestamp(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_text_form() {
        assert_eq!(
            Timestamp::from_formatted_str("-9223372036854775808").unwrap(),
            Timestamp::from_nanos(i64::MIN)
        );
        assert_eq!(
            Timestamp::from_formatted_str("1700000000000000000").unwrap(),
            Timestamp::from_nanos(1_700_000_000_000_000_000)
        );
        assert_eq!(
            Timestamp::from_formatted_str("soon"),
            Err(InvalidFormat::InvalidInteger)
        );
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&Timestamp::from_nanos(i64::MIN));
        bytesrepr::test_serialization_roundtrip(&Timestamp::from_nanos(i64::MAX));
    }
}
