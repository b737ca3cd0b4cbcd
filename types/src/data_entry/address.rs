use alloc::{string::String, vec::Vec};
use core::{
    convert::TryFrom,
    fmt::{self, Debug, Display, Formatter},
};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{de::Error as SerdeError, Deserialize, Deserializer, Serialize, Serializer};

use super::InvalidFormat;
use crate::{
    base58,
    bytesrepr::{self, FromBytes, ToBytes},
};

/// The number of bytes in an [`Address`].
pub const ADDRESS_LENGTH: usize = 26;

/// The on-chain address of an account, as stored in contract state.
///
/// The canonical text form is base58 (Bitcoin alphabet).
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Constructs a new `Address` from its raw bytes.
    pub const fn new(value: [u8; ADDRESS_LENGTH]) -> Self {
        Address(value)
    }

    /// Returns the raw bytes of the address as an array.
    pub fn value(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the raw bytes of the address as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the base58 text form of the address.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(self.0)
    }

    /// Parses the base58 text form of an address.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode_fixed(input).map(Address)
    }
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(self.0))
    }
}

impl Debug for Address {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "Address({})", base58::encode(self.0))
    }
}

impl ToBytes for Address {
    #[inline(always)]
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    #[inline(always)]
    fn serialized_length(&self) -> usize {
        ADDRESS_LENGTH
    }
}

impl FromBytes for Address {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (bytes, remainder) = FromBytes::from_bytes(bytes)?;
        Ok((Address(bytes), remainder))
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = InvalidFormat;

    fn try_from(bytes: &[u8]) -> Result<Self, InvalidFormat> {
        <[u8; ADDRESS_LENGTH]>::try_from(bytes)
            .map(Address)
            .map_err(|_| InvalidFormat::UnexpectedLength {
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_formatted_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let formatted_string = String::deserialize(deserializer)?;
            Address::from_formatted_str(&formatted_string).map_err(SerdeError::custom)
        } else {
            let bytes = <[u8; ADDRESS_LENGTH]>::deserialize(deserializer)?;
            Ok(Address(bytes))
        }
    }
}

impl Distribution<Address> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Address {
        Address(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_formatted_string() {
        let address = Address::new([7; ADDRESS_LENGTH]);
        let formatted = address.to_formatted_string();
        assert_eq!(Address::from_formatted_str(&formatted).unwrap(), address);
    }

    #[test]
    fn should_reject_wrong_decoded_length() {
        // Valid base58, but decodes to a single byte.
        assert_eq!(
            Address::from_formatted_str("2t"),
            Err(InvalidFormat::UnexpectedLength {
                expected: ADDRESS_LENGTH,
                actual: 1
            })
        );
    }

    #[test]
    fn should_reject_invalid_base58() {
        assert!(matches!(
            Address::from_formatted_str("l0I"),
            Err(InvalidFormat::Base58(_))
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let address = Address::new([42; ADDRESS_LENGTH]);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", address.to_formatted_string()));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);

        let binary = bincode::serialize(&address).unwrap();
        assert_eq!(bincode::deserialize::<Address>(&binary).unwrap(), address);
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&Address::new([255; ADDRESS_LENGTH]));
    }
}
