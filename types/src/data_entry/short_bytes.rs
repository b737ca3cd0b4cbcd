use alloc::{string::String, vec::Vec};
use core::{
    convert::TryFrom,
    fmt::{self, Debug, Display, Formatter},
};

use hex_fmt::HexFmt;
use serde::{Deserialize, Serialize};

use super::{InvalidFormat, MAX_SHORT_PAYLOAD_LENGTH};
use crate::base58;

/// An opaque byte string whose length fits the wire format's `u16` prefix.
///
/// Used for sub-keys with no richer type, such as order identifiers. Validated at construction,
/// so encoding an already constructed value cannot fail. The text form is base58.
#[derive(Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ShortBytes(Vec<u8>);

impl ShortBytes {
    /// Constructs a new `ShortBytes`, rejecting input longer than
    /// [`MAX_SHORT_PAYLOAD_LENGTH`] bytes.
    pub fn try_new(bytes: Vec<u8>) -> Result<Self, InvalidFormat> {
        if bytes.len() > MAX_SHORT_PAYLOAD_LENGTH {
            return Err(InvalidFormat::TooLong {
                max: MAX_SHORT_PAYLOAD_LENGTH,
                actual: bytes.len(),
            });
        }
        Ok(ShortBytes(bytes))
    }

    pub(crate) fn new_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.len() <= MAX_SHORT_PAYLOAD_LENGTH);
        ShortBytes(bytes)
    }

    /// Parses the base58 text form of a byte string.
    pub fn from_formatted_str(input: &str) -> Result<Self, InvalidFormat> {
        base58::decode(input).and_then(ShortBytes::try_new)
    }

    /// Returns the base58 text form of the byte string.
    pub fn to_formatted_string(&self) -> String {
        base58::encode(&self.0)
    }

    /// Returns the bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the byte string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ShortBytes {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", base58::encode(&self.0))
    }
}

impl Debug for ShortBytes {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "ShortBytes({:10})", HexFmt(&self.0))
    }
}

impl AsRef<[u8]> for ShortBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for ShortBytes {
    type Error = InvalidFormat;

    fn try_from(bytes: Vec<u8>) -> Result<Self, InvalidFormat> {
        ShortBytes::try_new(bytes)
    }
}

impl From<ShortBytes> for Vec<u8> {
    fn from(bytes: ShortBytes) -> Self {
        bytes.0
    }
}
