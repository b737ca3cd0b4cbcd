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

/// The number of bytes in a [`TokenId`].
pub const TOKEN_ID_LENGTH: usize = 30;

/// The identifier of a token issued by a token contract.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TokenId([u8; TOKEN_ID_LENGTH]);

impl TokenId {
    /// Constructs a new `TokenId` from its raw bytes.
    pub const fn new(value: [u8; TOKEN_ID_LENGTH]) -> Self {
        TokenId(value)
    }

    /// Returns the raw bytes of the token id as an array.
    pub fn value(&self) -> [u8; TOKEN_ID_LENGTH] {
        self.0
    }

    /// Returns the raw bytes of the token id as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the base58 text form of the token id.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(self.0)
    }

    /// Parses the base58 text form of a token id.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode_fixed(input).map(TokenId)
    }
}

impl Display for TokenId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(self.0))
    }
}

impl Debug for TokenId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "TokenId({})", base58::encode(self.0))
    }
}

impl ToBytes for TokenId {
    #[inline(always)]
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    #[inline(always)]
    fn serialized_length(&self) -> usize {
        TOKEN_ID_LENGTH
    }
}

impl FromBytes for TokenId {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (bytes, remainder) = FromBytes::from_bytes(bytes)?;
        Ok((TokenId(bytes), remainder))
    }
}

impl AsRef<[u8]> for TokenId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_formatted_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for TokenId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let formatted_string = String::deserialize(deserializer)?;
            TokenId::from_formatted_str(&formatted_string).map_err(SerdeError::custom)
        } else {
            let bytes = <[u8; TOKEN_ID_LENGTH]>::deserialize(deserializer)?;
            Ok(TokenId(bytes))
        }
    }
}

impl Distribution<TokenId> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TokenId {
        TokenId(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_formatted_string() {
        let token_id = TokenId::new([9; TOKEN_ID_LENGTH]);
        let formatted = token_id.to_formatted_string();
        assert_eq!(TokenId::from_formatted_str(&formatted).unwrap(), token_id);
    }

    #[test]
    fn should_reject_address_length_input() {
        let address_like = base58::encode([7u8; 26]);
        assert_eq!(
            TokenId::from_formatted_str(&address_like),
            Err(InvalidFormat::UnexpectedLength {
                expected: TOKEN_ID_LENGTH,
                actual: 26
            })
        );
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&TokenId::new([9; TOKEN_ID_LENGTH]));
    }
}
