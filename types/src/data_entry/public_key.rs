use alloc::{string::String, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};

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

/// The number of bytes in a [`PublicKey`].
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// An account public key as stored in contract state.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    /// Constructs a new `PublicKey` from its raw bytes.
    pub const fn new(value: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        PublicKey(value)
    }

    /// Returns the raw bytes of the public key as an array.
    pub fn value(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// Returns the raw bytes of the public key as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the base58 text form of the public key.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(self.0)
    }

    /// Parses the base58 text form of a public key.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode_fixed(input).map(PublicKey)
    }
}

impl Display for PublicKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(self.0))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "PublicKey({})", base58::encode(self.0))
    }
}

impl ToBytes for PublicKey {
    #[inline(always)]
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    #[inline(always)]
    fn serialized_length(&self) -> usize {
        PUBLIC_KEY_LENGTH
    }
}

impl FromBytes for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (bytes, remainder) = FromBytes::from_bytes(bytes)?;
        Ok((PublicKey(bytes), remainder))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_formatted_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let formatted_string = String::deserialize(deserializer)?;
            PublicKey::from_formatted_str(&formatted_string).map_err(SerdeError::custom)
        } else {
            let bytes = <[u8; PUBLIC_KEY_LENGTH]>::deserialize(deserializer)?;
            Ok(PublicKey(bytes))
        }
    }
}

impl Distribution<PublicKey> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PublicKey {
        PublicKey(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_formatted_string() {
        let public_key = PublicKey::new([1; PUBLIC_KEY_LENGTH]);
        let formatted = public_key.to_formatted_string();
        assert_eq!(PublicKey::from_formatted_str(&formatted).unwrap(), public_key);
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&PublicKey::new([0; PUBLIC_KEY_LENGTH]));
        bytesrepr::test_serialization_roundtrip(&PublicKey::new([255; PUBLIC_KEY_LENGTH]));
    }
}
