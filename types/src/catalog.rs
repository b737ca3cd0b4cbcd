//! Index catalogs: the closed, ordered enumerations binding symbolic names to the stable
//! wire codes of one contract type's functions, state variables and state maps.
//!
//! Codes are protocol constants. They are stable for the lifetime of a deployed contract version
//! and are never reused for a different name; changing one is a breaking protocol version change.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::bytesrepr::{
    self, FromBytes, ToBytes, U16_SERIALIZED_LENGTH, U8_SERIALIZED_LENGTH,
};

/// The number of bytes in a serialized [`FuncIdx`].
pub const FUNC_IDX_SERIALIZED_LENGTH: usize = U16_SERIALIZED_LENGTH;
/// The number of bytes in a serialized [`StateVarIdx`].
pub const STATE_VAR_IDX_SERIALIZED_LENGTH: usize = U8_SERIALIZED_LENGTH;
/// The number of bytes in a serialized [`StateMapIdx`].
pub const STATE_MAP_IDX_SERIALIZED_LENGTH: usize = U8_SERIALIZED_LENGTH;

/// The code identifying which entry point of a contract a transaction invokes.
///
/// Encodes as 2 big-endian bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct FuncIdx(u16);

impl FuncIdx {
    /// Constructs a new `FuncIdx` from its wire code.
    pub const fn new(code: u16) -> Self {
        FuncIdx(code)
    }

    /// Returns the wire code.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Display for FuncIdx {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl ToBytes for FuncIdx {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        FUNC_IDX_SERIALIZED_LENGTH
    }
}

impl FromBytes for FuncIdx {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (code, remainder) = u16::from_bytes(bytes)?;
        Ok((FuncIdx(code), remainder))
    }
}

/// The code of a singleton state variable slot.
///
/// Encodes as a single byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct StateVarIdx(u8);

impl StateVarIdx {
    /// Constructs a new `StateVarIdx` from its wire code.
    pub const fn new(code: u8) -> Self {
        StateVarIdx(code)
    }

    /// Returns the wire code.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for StateVarIdx {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl ToBytes for StateVarIdx {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        STATE_VAR_IDX_SERIALIZED_LENGTH
    }
}

impl FromBytes for StateVarIdx {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (code, remainder) = u8::from_bytes(bytes)?;
        Ok((StateVarIdx(code), remainder))
    }
}

/// The code of a keyed state family.
///
/// Encodes as a single byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct StateMapIdx(u8);

impl StateMapIdx {
    /// Constructs a new `StateMapIdx` from its wire code.
    pub const fn new(code: u8) -> Self {
        StateMapIdx(code)
    }

    /// Returns the wire code.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for StateMapIdx {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl ToBytes for StateMapIdx {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        self.0.to_bytes()
    }

    fn serialized_length(&self) -> usize {
        STATE_MAP_IDX_SERIALIZED_LENGTH
    }
}

impl FromBytes for StateMapIdx {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        let (code, remainder) = u8::from_bytes(bytes)?;
        Ok((StateMapIdx(code), remainder))
    }
}

/// The kind of a [`Catalog`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogKind {
    /// Callable contract entry points.
    Function,
    /// Singleton state variable slots.
    StateVar,
    /// Keyed state families.
    StateMap,
}

impl Display for CatalogKind {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            CatalogKind::Function => formatter.write_str("function"),
            CatalogKind::StateVar => formatter.write_str("state variable"),
            CatalogKind::StateMap => formatter.write_str("state map"),
        }
    }
}

/// An index-code newtype usable as the entry type of a [`Catalog`].
pub trait CatalogIndex: Copy + Eq {
    /// The catalog kind this index type belongs to.
    const KIND: CatalogKind;

    /// Returns the numeric code, widened for comparison and display.
    fn code(self) -> u16;
}

impl CatalogIndex for FuncIdx {
    const KIND: CatalogKind = CatalogKind::Function;

    fn code(self) -> u16 {
        self.0
    }
}

impl CatalogIndex for StateVarIdx {
    const KIND: CatalogKind = CatalogKind::StateVar;

    fn code(self) -> u16 {
        u16::from(self.0)
    }
}

impl CatalogIndex for StateMapIdx {
    const KIND: CatalogKind = CatalogKind::StateMap;

    fn code(self) -> u16 {
        u16::from(self.0)
    }
}

/// Error returned by catalog lookups. Programmer error, deterministic, never retried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogError {
    /// No entry with the given name exists in the catalog.
    UnknownIndexName {
        /// The kind of the catalog queried.
        kind: CatalogKind,
        /// The name that was looked up.
        name: String,
    },
    /// No entry with the given code exists in the catalog.
    UnknownIndexCode {
        /// The kind of the catalog queried.
        kind: CatalogKind,
        /// The code that was looked up.
        code: u16,
    },
}

impl Display for CatalogError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            CatalogError::UnknownIndexName { kind, name } => {
                write!(formatter, "no {} index named {:?}", kind, name)
            }
            CatalogError::UnknownIndexCode { kind, code } => {
                write!(formatter, "no {} index with code {}", kind, code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

/// An ordered, immutable mapping from symbolic names to index codes, built once from a static
/// table at registry initialisation and never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<I: 'static> {
    entries: &'static [(&'static str, I)],
}

impl<I: CatalogIndex> Catalog<I> {
    /// Builds a catalog from a static table.
    ///
    /// Panics if two entries share a name or a code: a duplicate is a defect in the static
    /// contract definition, never a runtime condition.
    pub fn new(entries: &'static [(&'static str, I)]) -> Self {
        for (position, (name, index)) in entries.iter().enumerate() {
            for (earlier_name, earlier_index) in &entries[..position] {
                if name == earlier_name {
                    panic!("duplicate name {:?} in {} catalog", name, I::KIND);
                }
                if index.code() == earlier_index.code() {
                    panic!(
                        "duplicate code {} in {} catalog ({:?} and {:?})",
                        index.code(),
                        I::KIND,
                        earlier_name,
                        name
                    );
                }
            }
        }
        Catalog { entries }
    }

    /// Returns the index registered under `name`.
    pub fn index_of(&self, name: &str) -> Result<I, CatalogError> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, index)| *index)
            .ok_or_else(|| CatalogError::UnknownIndexName {
                kind: I::KIND,
                name: String::from(name),
            })
    }

    /// Returns the name registered for `index`.
    pub fn name_of(&self, index: I) -> Result<&'static str, CatalogError> {
        self.entries
            .iter()
            .find(|(_, entry_index)| *entry_index == index)
            .map(|(name, _)| *name)
            .ok_or(CatalogError::UnknownIndexCode {
                kind: I::KIND,
                code: index.code(),
            })
    }

    /// Returns an iterator over the `(name, index)` entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, I)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
