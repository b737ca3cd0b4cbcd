//! The tagged union of typed values held in, or used to address, contract state, together with its
//! canonical binary and text codecs.

mod address;
mod amount;
mod contract_id;
mod public_key;
mod short_bytes;
mod short_text;
mod timestamp;
mod token_id;

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

use serde::{de::Error as SerdeError, Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::{
    base58,
    bytesrepr::{
        self, FromBytes, ToBytes, BOOL_SERIALIZED_LENGTH, I64_SERIALIZED_LENGTH,
        U32_SERIALIZED_LENGTH, U64_SERIALIZED_LENGTH, U8_SERIALIZED_LENGTH,
    },
};

pub use address::{Address, ADDRESS_LENGTH};
pub use amount::Amount;
pub use contract_id::{ContractId, CONTRACT_ID_LENGTH};
pub use public_key::{PublicKey, PUBLIC_KEY_LENGTH};
pub use short_bytes::ShortBytes;
pub use short_text::ShortText;
pub use timestamp::Timestamp;
pub use token_id::{TokenId, TOKEN_ID_LENGTH};

/// The maximum byte length of a variable-length payload (`Text` or `Bytes`), fixed by the `u16`
/// length prefix of the wire format.
pub const MAX_SHORT_PAYLOAD_LENGTH: usize = u16::MAX as usize;

/// Error returned when parsing a caller-supplied textual identifier fails.
///
/// Deterministic in its input; retrying without changing the input is never useful.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidFormat {
    /// The input was not valid base58.
    Base58(bs58::decode::Error),
    /// The decoded byte length did not match the expected fixed length.
    UnexpectedLength {
        /// The length required by the value's type.
        expected: usize,
        /// The length actually decoded.
        actual: usize,
    },
    /// The input was not a valid decimal integer for the value's type.
    InvalidInteger,
    /// The input was neither `"true"` nor `"false"`.
    InvalidBoolean,
    /// The payload exceeds the length representable by the wire format's `u16` prefix.
    TooLong {
        /// The maximum representable length.
        max: usize,
        /// The length actually supplied.
        actual: usize,
    },
}

impl Display for InvalidFormat {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            InvalidFormat::Base58(error) => write!(formatter, "invalid base58: {}", error),
            InvalidFormat::UnexpectedLength { expected, actual } => write!(
                formatter,
                "unexpected decoded length: expected {}, got {}",
                expected, actual
            ),
            InvalidFormat::InvalidInteger => formatter.write_str("invalid decimal integer"),
            InvalidFormat::InvalidBoolean => {
                formatter.write_str("invalid boolean: expected \"true\" or \"false\"")
            }
            InvalidFormat::TooLong { max, actual } => {
                write!(formatter, "payload too long: max {}, got {}", max, actual)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidFormat {}

/// Error returned when decoding remote state bytes fails.
///
/// Indicates a protocol mismatch between this library and the remote contract engine; a value is
/// never partially decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedValue {
    /// The leading tag byte does not name a known data type.
    UnknownTag(u8),
    /// A boolean payload byte was neither `0` nor `1`.
    InvalidBoolean(u8),
    /// A text payload was not valid UTF-8.
    InvalidUtf8,
    /// Bytes remained after the value was fully decoded.
    TrailingBytes(usize),
    /// The underlying byte stream ended early or was otherwise malformed.
    Stream(bytesrepr::Error),
}

impl Display for MalformedValue {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            MalformedValue::UnknownTag(tag) => write!(formatter, "unknown data type tag {}", tag),
            MalformedValue::InvalidBoolean(byte) => {
                write!(formatter, "invalid boolean byte {}", byte)
            }
            MalformedValue::InvalidUtf8 => formatter.write_str("text payload is not valid UTF-8"),
            MalformedValue::TrailingBytes(count) => {
                write!(formatter, "{} trailing bytes after value", count)
            }
            MalformedValue::Stream(error) => write!(formatter, "malformed stream: {}", error),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedValue {}

impl From<bytesrepr::Error> for MalformedValue {
    fn from(error: bytesrepr::Error) -> Self {
        MalformedValue::Stream(error)
    }
}

/// The tag identifying the variant of a [`DataEntry`] on the wire.
///
/// Tag `0` is reserved and never valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum DataType {
    /// A 32-byte account public key.
    PublicKey = 1,
    /// A 26-byte account address.
    Address = 2,
    /// A `u64` token amount.
    Amount = 3,
    /// A `u32` integer.
    Int32 = 4,
    /// A UTF-8 string of at most [`MAX_SHORT_PAYLOAD_LENGTH`] bytes.
    Text = 5,
    /// A 26-byte contract identifier.
    ContractId = 6,
    /// A 30-byte token identifier.
    TokenId = 7,
    /// A timestamp in nanoseconds since the Unix epoch.
    Timestamp = 8,
    /// A boolean.
    Boolean = 9,
    /// An opaque byte string of at most [`MAX_SHORT_PAYLOAD_LENGTH`] bytes.
    Bytes = 10,
    /// A `u64` balance.
    Balance = 11,
}

impl DataType {
    /// Returns the wire tag of this data type.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Returns the data type for the given wire tag, or `None` if the tag is unassigned.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(DataType::PublicKey),
            2 => Some(DataType::Address),
            3 => Some(DataType::Amount),
            4 => Some(DataType::Int32),
            5 => Some(DataType::Text),
            6 => Some(DataType::ContractId),
            7 => Some(DataType::TokenId),
            8 => Some(DataType::Timestamp),
            9 => Some(DataType::Boolean),
            10 => Some(DataType::Bytes),
            11 => Some(DataType::Balance),
            _ => None,
        }
    }

    /// Returns the symbolic name of this data type.
    pub fn name(self) -> &'static str {
        match self {
            DataType::PublicKey => "PublicKey",
            DataType::Address => "Address",
            DataType::Amount => "Amount",
            DataType::Int32 => "Int32",
            DataType::Text => "Text",
            DataType::ContractId => "ContractId",
            DataType::TokenId => "TokenId",
            DataType::Timestamp => "Timestamp",
            DataType::Boolean => "Boolean",
            DataType::Bytes => "Bytes",
            DataType::Balance => "Balance",
        }
    }

    /// Returns the data type with the given symbolic name, or `None` if the name is unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PublicKey" => Some(DataType::PublicKey),
            "Address" => Some(DataType::Address),
            "Amount" => Some(DataType::Amount),
            "Int32" => Some(DataType::Int32),
            "Text" => Some(DataType::Text),
            "ContractId" => Some(DataType::ContractId),
            "TokenId" => Some(DataType::TokenId),
            "Timestamp" => Some(DataType::Timestamp),
            "Boolean" => Some(DataType::Boolean),
            "Bytes" => Some(DataType::Bytes),
            "Balance" => Some(DataType::Balance),
            _ => None,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A typed value held in, or used to address, contract state.
///
/// Serializes as `tag(1 byte) || payload`; all multi-byte integers are big-endian.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DataEntry {
    /// A 32-byte account public key.
    PublicKey(PublicKey),
    /// A 26-byte account address.
    Address(Address),
    /// A `u64` token amount.
    Amount(Amount),
    /// A `u32` integer.
    Int32(u32),
    /// A UTF-8 string.
    Text(ShortText),
    /// A 26-byte contract identifier.
    ContractId(ContractId),
    /// A 30-byte token identifier.
    TokenId(TokenId),
    /// A timestamp in nanoseconds since the Unix epoch.
    Timestamp(Timestamp),
    /// A boolean.
    Boolean(bool),
    /// An opaque byte string.
    Bytes(ShortBytes),
    /// A `u64` balance.
    Balance(Amount),
}

impl DataEntry {
    /// Returns the [`DataType`] of this entry.
    pub fn data_type(&self) -> DataType {
        match self {
            DataEntry::PublicKey(_) => DataType::PublicKey,
            DataEntry::Address(_) => DataType::Address,
            DataEntry::Amount(_) => DataType::Amount,
            DataEntry::Int32(_) => DataType::Int32,
            DataEntry::Text(_) => DataType::Text,
            DataEntry::ContractId(_) => DataType::ContractId,
            DataEntry::TokenId(_) => DataType::TokenId,
            DataEntry::Timestamp(_) => DataType::Timestamp,
            DataEntry::Boolean(_) => DataType::Boolean,
            DataEntry::Bytes(_) => DataType::Bytes,
            DataEntry::Balance(_) => DataType::Balance,
        }
    }

    /// Parses the canonical text form of a value of the given type.
    ///
    /// The text form is base58 for byte-valued types, decimal for integer types, the text itself
    /// for `Text` and `"true"`/`"false"` for `Boolean`.
    pub fn parse(data_type: DataType, input: &str) -> Result<Self, InvalidFormat> {
        match data_type {
            DataType::PublicKey => {
                PublicKey::from_formatted_str(input).map(DataEntry::PublicKey)
            }
            DataType::Address => Address::from_formatted_str(input).map(DataEntry::Address),
            DataType::Amount => Amount::from_formatted_str(input).map(DataEntry::Amount),
            DataType::Int32 => input
                .parse::<u32>()
                .map(DataEntry::Int32)
                .map_err(|_| InvalidFormat::InvalidInteger),
            DataType::Text => {
                ShortText::try_new(String::from(input)).map(DataEntry::Text)
            }
            DataType::ContractId => {
                ContractId::from_formatted_str(input).map(DataEntry::ContractId)
            }
            DataType::TokenId => TokenId::from_formatted_str(input).map(DataEntry::TokenId),
            DataType::Timestamp => {
                Timestamp::from_formatted_str(input).map(DataEntry::Timestamp)
            }
            DataType::Boolean => match input {
                "true" => Ok(DataEntry::Boolean(true)),
                "false" => Ok(DataEntry::Boolean(false)),
                _ => Err(InvalidFormat::InvalidBoolean),
            },
            DataType::Bytes => base58::decode(input)
                .and_then(ShortBytes::try_new)
                .map(DataEntry::Bytes),
            DataType::Balance => Amount::from_formatted_str(input).map(DataEntry::Balance),
        }
    }

    /// Decodes a value from the raw bytes returned by a remote state query.
    ///
    /// Fails if the tag is unknown, the payload is truncated or structurally invalid, or any bytes
    /// remain after the value.
    pub fn decode(bytes: &[u8]) -> Result<Self, MalformedValue> {
        let (entry, remainder) = Self::take(bytes).map_err(|error| {
            warn!(%error, "failed to decode data entry");
            error
        })?;
        if !remainder.is_empty() {
            warn!(trailing = remainder.len(), "trailing bytes after data entry");
            return Err(MalformedValue::TrailingBytes(remainder.len()));
        }
        Ok(entry)
    }

    /// Returns the canonical wire encoding of this entry.
    ///
    /// Cannot fail: variable-length payloads are capped at construction time.
    pub fn encoded(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.serialized_length());
        result.push(self.data_type().tag());
        self.write_payload(&mut result);
        result
    }

    pub(crate) fn take(bytes: &[u8]) -> Result<(Self, &[u8]), MalformedValue> {
        let (tag, remainder) = u8::from_bytes(bytes)?;
        let data_type = DataType::from_tag(tag).ok_or(MalformedValue::UnknownTag(tag))?;
        match data_type {
            DataType::PublicKey => {
                let (public_key, remainder) = PublicKey::from_bytes(remainder)?;
                Ok((DataEntry::PublicKey(public_key), remainder))
            }
            DataType::Address => {
                let (address, remainder) = Address::from_bytes(remainder)?;
                Ok((DataEntry::Address(address), remainder))
            }
            DataType::Amount => {
                let (amount, remainder) = Amount::from_bytes(remainder)?;
                Ok((DataEntry::Amount(amount), remainder))
            }
            DataType::Int32 => {
                let (value, remainder) = u32::from_bytes(remainder)?;
                Ok((DataEntry::Int32(value), remainder))
            }
            DataType::Text => {
                let (payload, remainder) = bytesrepr::read_u16_prefixed(remainder)?;
                let text = core::str::from_utf8(payload)
                    .map_err(|_| MalformedValue::InvalidUtf8)?;
                Ok((
                    DataEntry::Text(ShortText::new_unchecked(String::from(text))),
                    remainder,
                ))
            }
            DataType::ContractId => {
                let (contract_id, remainder) = ContractId::from_bytes(remainder)?;
                Ok((DataEntry::ContractId(contract_id), remainder))
            }
            DataType::TokenId => {
                let (token_id, remainder) = TokenId::from_bytes(remainder)?;
                Ok((DataEntry::TokenId(token_id), remainder))
            }
            DataType::Timestamp => {
                let (timestamp, remainder) = Timestamp::from_bytes(remainder)?;
                Ok((DataEntry::Timestamp(timestamp), remainder))
            }
            DataType::Boolean => {
                let (byte, remainder) = u8::from_bytes(remainder)?;
                match byte {
                    0 => Ok((DataEntry::Boolean(false), remainder)),
                    1 => Ok((DataEntry::Boolean(true), remainder)),
                    other => Err(MalformedValue::InvalidBoolean(other)),
                }
            }
            DataType::Bytes => {
                let (payload, remainder) = bytesrepr::read_u16_prefixed(remainder)?;
                Ok((
                    DataEntry::Bytes(ShortBytes::new_unchecked(payload.to_vec())),
                    remainder,
                ))
            }
            DataType::Balance => {
                let (amount, remainder) = Amount::from_bytes(remainder)?;
                Ok((DataEntry::Balance(amount), remainder))
            }
        }
    }

    fn write_payload(&self, writer: &mut Vec<u8>) {
        match self {
            DataEntry::PublicKey(public_key) => writer.extend_from_slice(public_key.as_bytes()),
            DataEntry::Address(address) => writer.extend_from_slice(address.as_bytes()),
            DataEntry::Amount(amount) | DataEntry::Balance(amount) => {
                writer.extend_from_slice(&amount.value().to_be_bytes())
            }
            DataEntry::Int32(value) => writer.extend_from_slice(&value.to_be_bytes()),
            DataEntry::Text(text) => {
                // The length is capped at construction, so the cast cannot truncate.
                writer.extend_from_slice(&(text.len() as u16).to_be_bytes());
                writer.extend_from_slice(text.as_str().as_bytes());
            }
            DataEntry::ContractId(contract_id) => {
                writer.extend_from_slice(contract_id.as_bytes())
            }
            DataEntry::TokenId(token_id) => writer.extend_from_slice(token_id.as_bytes()),
            DataEntry::Timestamp(timestamp) => {
                writer.extend_from_slice(&timestamp.value().to_be_bytes())
            }
            DataEntry::Boolean(value) => writer.push(u8::from(*value)),
            DataEntry::Bytes(bytes) => {
                writer.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
                writer.extend_from_slice(bytes.as_slice());
            }
        }
    }
}

impl Display for DataEntry {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            DataEntry::PublicKey(public_key) => write!(formatter, "{}", public_key),
            DataEntry::Address(address) => write!(formatter, "{}", address),
            DataEntry::Amount(amount) | DataEntry::Balance(amount) => {
                write!(formatter, "{}", amount)
            }
            DataEntry::Int32(value) => write!(formatter, "{}", value),
            DataEntry::Text(text) => write!(formatter, "{}", text),
            DataEntry::ContractId(contract_id) => write!(formatter, "{}", contract_id),
            DataEntry::TokenId(token_id) => write!(formatter, "{}", token_id),
            DataEntry::Timestamp(timestamp) => write!(formatter, "{}", timestamp),
            DataEntry::Boolean(value) => write!(formatter, "{}", value),
            DataEntry::Bytes(bytes) => write!(formatter, "{}", bytes),
        }
    }
}

impl ToBytes for DataEntry {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        Ok(self.encoded())
    }

    fn serialized_length(&self) -> usize {
        U8_SERIALIZED_LENGTH
            + match self {
                DataEntry::PublicKey(_) => PUBLIC_KEY_LENGTH,
                DataEntry::Address(_) => ADDRESS_LENGTH,
                DataEntry::Amount(_) | DataEntry::Balance(_) => U64_SERIALIZED_LENGTH,
                DataEntry::Int32(_) => U32_SERIALIZED_LENGTH,
                DataEntry::Text(text) => {
                    bytesrepr::u16_prefixed_serialized_length(text.as_str().as_bytes())
                }
                DataEntry::ContractId(_) => CONTRACT_ID_LENGTH,
                DataEntry::TokenId(_) => TOKEN_ID_LENGTH,
                DataEntry::Timestamp(_) => I64_SERIALIZED_LENGTH,
                DataEntry::Boolean(_) => BOOL_SERIALIZED_LENGTH,
                DataEntry::Bytes(bytes) => {
                    bytesrepr::u16_prefixed_serialized_length(bytes.as_slice())
                }
            }
    }
}

impl FromBytes for DataEntry {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        Self::take(bytes).map_err(|error| match error {
            MalformedValue::Stream(stream_error) => stream_error,
            _ => bytesrepr::Error::Formatting,
        })
    }
}

mod serde_helpers {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub(super) struct HumanReadable {
        #[serde(rename = "type")]
        pub data_type: String,
        pub value: String,
    }

    impl From<&DataEntry> for HumanReadable {
        fn from(entry: &DataEntry) -> Self {
            HumanReadable {
                data_type: entry.data_type().to_string(),
                value: entry.to_string(),
            }
        }
    }

    impl TryFrom<HumanReadable> for DataEntry {
        type Error = String;

        fn try_from(helper: HumanReadable) -> Result<Self, Self::Error> {
            let data_type = DataType::from_name(&helper.data_type)
                .ok_or_else(|| alloc::format!("unknown data type {:?}", helper.data_type))?;
            DataEntry::parse(data_type, &helper.value).map_err(|error| error.to_string())
        }
    }
}

impl Serialize for DataEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serde_helpers::HumanReadable::from(self).serialize(serializer)
        } else {
            self.encoded().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for DataEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let human_readable = serde_helpers::HumanReadable::deserialize(deserializer)?;
            DataEntry::try_from(human_readable).map_err(SerdeError::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            DataEntry::decode(&bytes).map_err(SerdeError::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::gens;

    fn sample_entries() -> Vec<DataEntry> {
        vec![
            DataEntry::PublicKey(PublicKey::new([1; PUBLIC_KEY_LENGTH])),
            DataEntry::Address(Address::new([7; ADDRESS_LENGTH])),
            DataEntry::Amount(Amount::new(0)),
            DataEntry::Amount(Amount::MAX),
            DataEntry::Int32(0),
            DataEntry::Int32(u32::MAX),
            DataEntry::Text(ShortText::try_new(String::new()).unwrap()),
            DataEntry::Text(ShortText::try_new(String::from("an order memo")).unwrap()),
            DataEntry::ContractId(ContractId::new([5; CONTRACT_ID_LENGTH])),
            DataEntry::TokenId(TokenId::new([9; TOKEN_ID_LENGTH])),
            DataEntry::Timestamp(Timestamp::from_nanos(i64::MIN)),
            DataEntry::Timestamp(Timestamp::from_nanos(i64::MAX)),
            DataEntry::Boolean(false),
            DataEntry::Boolean(true),
            DataEntry::Bytes(ShortBytes::try_new(Vec::new()).unwrap()),
            DataEntry::Bytes(ShortBytes::try_new(vec![42; 32]).unwrap()),
            DataEntry::Balance(Amount::new(123_456_789)),
        ]
    }

    #[test]
    fn should_roundtrip_all_variants_through_bytes() {
        for entry in sample_entries() {
            let encoded = entry.encoded();
            assert_eq!(encoded.len(), entry.serialized_length());
            assert_eq!(DataEntry::decode(&encoded).unwrap(), entry);
        }
    }

    #[test]
    fn should_roundtrip_all_variants_through_text() {
        for entry in sample_entries() {
            let formatted = entry.to_string();
            let parsed = DataEntry::parse(entry.data_type(), &formatted).unwrap();
            assert_eq!(parsed, entry);
        }
    }

    #[test]
    fn should_reject_reserved_and_unknown_tags() {
        assert_eq!(
            DataEntry::decode(&[0]),
            Err(MalformedValue::UnknownTag(0))
        );
        assert_eq!(
            DataEntry::decode(&[12, 1, 2, 3]),
            Err(MalformedValue::UnknownTag(12))
        );
    }

    #[test]
    fn should_reject_truncated_payload() {
        // Address tag followed by too few bytes.
        let mut encoded = DataEntry::Address(Address::new([7; ADDRESS_LENGTH])).encoded();
        encoded.pop();
        assert_eq!(
            DataEntry::decode(&encoded),
            Err(MalformedValue::Stream(bytesrepr::Error::EarlyEndOfStream))
        );
        assert_eq!(
            DataEntry::decode(&[]),
            Err(MalformedValue::Stream(bytesrepr::Error::EarlyEndOfStream))
        );
    }

    #[test]
    fn should_reject_trailing_bytes() {
        let mut encoded = DataEntry::Boolean(true).encoded();
        encoded.push(0);
        assert_eq!(
            DataEntry::decode(&encoded),
            Err(MalformedValue::TrailingBytes(1))
        );
    }

    #[test]
    fn should_reject_invalid_boolean_byte() {
        assert_eq!(
            DataEntry::decode(&[DataType::Boolean.tag(), 2]),
            Err(MalformedValue::InvalidBoolean(2))
        );
    }

    #[test]
    fn should_reject_invalid_utf8_text() {
        let encoded = vec![DataType::Text.tag(), 0, 2, 0xff, 0xfe];
        assert_eq!(DataEntry::decode(&encoded), Err(MalformedValue::InvalidUtf8));
    }

    #[test]
    fn should_reject_malformed_text_forms() {
        assert!(matches!(
            DataEntry::parse(DataType::Address, "not-base58-!!!"),
            Err(InvalidFormat::Base58(_))
        ));
        assert_eq!(
            DataEntry::parse(DataType::Address, "2t"),
            Err(InvalidFormat::UnexpectedLength {
                expected: ADDRESS_LENGTH,
                actual: 1
            })
        );
        assert_eq!(
            DataEntry::parse(DataType::Amount, "18446744073709551616"),
            Err(InvalidFormat::InvalidInteger)
        );
        assert_eq!(
            DataEntry::parse(DataType::Int32, "-1"),
            Err(InvalidFormat::InvalidInteger)
        );
        assert_eq!(
            DataEntry::parse(DataType::Boolean, "yes"),
            Err(InvalidFormat::InvalidBoolean)
        );
    }

    #[test]
    fn should_reject_over_long_text() {
        let text = "x".repeat(MAX_SHORT_PAYLOAD_LENGTH + 1);
        assert_eq!(
            DataEntry::parse(DataType::Text, &text),
            Err(InvalidFormat::TooLong {
                max: MAX_SHORT_PAYLOAD_LENGTH,
                actual: MAX_SHORT_PAYLOAD_LENGTH + 1
            })
        );
    }

    #[test]
    fn data_type_tags_roundtrip() {
        for tag in 1..=11u8 {
            let data_type = DataType::from_tag(tag).unwrap();
            assert_eq!(data_type.tag(), tag);
            assert_eq!(DataType::from_name(data_type.name()), Some(data_type));
        }
        assert_eq!(DataType::from_tag(0), None);
        assert_eq!(DataType::from_name("Unknown"), None);
    }

    #[test]
    fn json_form_is_typed_object() {
        let entry = DataEntry::Amount(Amount::new(42));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"type":"Amount","value":"42"}"#);
        let decoded: DataEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn serde_roundtrips() {
        for entry in sample_entries() {
            let json = serde_json::to_string(&entry).unwrap();
            assert_eq!(serde_json::from_str::<DataEntry>(&json).unwrap(), entry);

            let binary = bincode::serialize(&entry).unwrap();
            assert_eq!(bincode::deserialize::<DataEntry>(&binary).unwrap(), entry);
        }
    }

    proptest! {
        #[test]
        fn bytesrepr_roundtrip(entry in gens::data_entry_arb()) {
            let encoded = entry.encoded();
            prop_assert_eq!(encoded.len(), entry.serialized_length());
            prop_assert_eq!(DataEntry::decode(&encoded).unwrap(), entry);
        }

        #[test]
        fn text_roundtrip(entry in gens::data_entry_arb()) {
            let parsed = DataEntry::parse(entry.data_type(), &entry.to_string()).unwrap();
            prop_assert_eq!(parsed, entry);
        }

        #[test]
        fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = DataEntry::decode(&bytes);
        }
    }
}
