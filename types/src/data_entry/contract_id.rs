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

/// The number of bytes in a [`ContractId`].
pub const CONTRACT_ID_LENGTH: usize = 26;

/// The identifier under which a deployed contract instance is registered on the ledger.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ContractId([u8; CONTRACT_ID_LENGTH]);

impl ContractId {
    /// Constructs a new `ContractId` from its raw bytes.
    pub const fn new(value: [u8; CONTRACT_ID_LENGTH]) -> Self {
        ContractId(value)
    }

    /// Returns the raw bytes of the contract id as an array.
    pub fn value(&self) -> [u8; CONTRACT_ID_LENGTH] {
        self.0
    }

    /// Returns the raw bytes of the contract id as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the base58 text form of the contract id.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(self.0)
    }

    /// Parses the base58 text form of a contract id.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode_fixed(input).map(ContractId)
    }
}

impl Display for ContractId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(self.0))
    }
}

impl Debug for ContractId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "ContractId({})", base58::encode(self.0))
    }
}

impl ToBytes for ContractId {
    #[inline(always)]
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    #[inline(always)]
    fn serialized_length(&self) -> usize {
        CONTRACT_ID_LENGTH
    }
}

impl FromBytes for ContractId {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (bytes, remainder) = FromBytes::from_bytes(bytes)?;
        Ok((ContractId(bytes), remainder))
    }
}

impl AsRef<[u8]> for ContractId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_formatted_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let formatted_string = String::deserialize(deserializer)?;
            ContractId::from_formatted_str(&formatted_string).map_err(SerdeError::custom)
        } else {
            let bytes = <[u8; CONTRACT_ID_LENGTH]>::deserialize(deserializer)?;
            Ok(ContractId(bytes))
        }
    }
}

impl Distribution<ContractId> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ContractId {
        ContractId(rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_formatted_string() {
        let contract_id = ContractId::new([5; CONTRACT_ID_LENGTH]);
        let formatted = contract_id.to_formatted_string();
        assert_eq!(
            ContractId::from_formatted_str(&formatted).unwrap(),
            contract_id
        );
    }

    #[test]
    fn bytesrepr_roundtrip() {
        bytesrepr::test_serialization_roundtrip(&ContractId::new([5; CONTRACT_ID_LENGTH]));
    }
}
