//! The canonical byte keys under which contract state slots are addressed in the remote
//! key-value store.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Debug, Display, Formatter};

use hex_fmt::HexFmt;
use serde::{de::Error as SerdeError, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    base58,
    bytesrepr::ToBytes,
    catalog::{StateMapIdx, StateVarIdx},
    data_entry::{DataEntry, InvalidFormat},
};

/// An opaque byte key uniquely addressing one slot of a contract's persistent state.
///
/// Either the single-byte code of a state variable, or a state-map code followed by the encoded
/// sub-key. Two semantically distinct slots never serialize to the same `DbKey`, and the same
/// logical slot always serializes identically. Keys are transient query artifacts, produced on
/// demand and not retained.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DbKey(Vec<u8>);

impl DbKey {
    /// Returns the key of the singleton state variable with the given index.
    pub fn state_var(index: StateVarIdx) -> Self {
        let mut bytes = Vec::with_capacity(1);
        bytes.push(index.value());
        DbKey(bytes)
    }

    /// Returns the key of the entry of the keyed state family `index` addressed by `sub_key`.
    pub fn state_map(index: StateMapIdx, sub_key: &DataEntry) -> Self {
        let mut bytes = Vec::with_capacity(1 + sub_key.serialized_length());
        bytes.push(index.value());
        bytes.extend_from_slice(&sub_key.encoded());
        DbKey(bytes)
    }

    /// Returns the raw key bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the key, returning its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns the base58 text form of the key, as used in query URL paths.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(&self.0)
    }

    /// Parses the base58 text form of a key.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode(input).map(DbKey)
    }
}

impl Display for DbKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(&self.0))
    }
}

impl Debug for DbKey {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "DbKey({})", HexFmt(&self.0))
    }
}

impl AsRef<[u8]> for DbKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DbKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_formatted_string().serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for DbKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let formatted_string = String::deserialize(deserializer)?;
            DbKey::from_formatted_str(&formatted_string).map_err(SerdeError::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            Ok(DbKey(bytes))
        }
    }
}

/// A reference to one entry of a keyed state family: the state-map index plus the typed sub-key.
///
/// Serializes deterministically to `code(index) || encode(sub_key)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateMapRef {
    index: StateMapIdx,
    sub_key: DataEntry,
}

impl StateMapRef {
    /// Constructs a new `StateMapRef`.
    pub fn new(index: StateMapIdx, sub_key: DataEntry) -> Self {
        StateMapRef { index, sub_key }
    }

    /// Returns the state-map index.
    pub fn index(&self) -> StateMapIdx {
        self.index
    }

    /// Returns the typed sub-key.
    pub fn sub_key(&self) -> &DataEntry {
        &self.sub_key
    }

    /// Returns the [`DbKey`] addressing this entry.
    pub fn to_db_key(&self) -> DbKey {
        DbKey::state_map(self.index, &self.sub_key)
    }
}
