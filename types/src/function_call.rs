//! The binary payloads that invoke contract functions in transactions.

use alloc::vec::Vec;
use core::convert::TryFrom;

use tracing::warn;

use crate::{
    bytesrepr::{self, FromBytes, ToBytes, U16_SERIALIZED_LENGTH},
    catalog::{FuncIdx, FUNC_IDX_SERIALIZED_LENGTH},
    data_entry::{DataEntry, MalformedValue},
};

/// A contract function invocation: the function index plus its typed arguments.
///
/// Serializes as `func idx (u16 BE) || argument count (u16 BE) || each argument's encoding`, in
/// argument order. This is the payload a transaction layer signs and submits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionCall {
    index: FuncIdx,
    arguments: Vec<DataEntry>,
}

impl FunctionCall {
    /// Constructs a new `FunctionCall`.
    pub fn new(index: FuncIdx, arguments: Vec<DataEntry>) -> Self {
        FunctionCall { index, arguments }
    }

    /// Returns the index of the invoked function.
    pub fn function_index(&self) -> FuncIdx {
        self.index
    }

    /// Returns the typed arguments in invocation order.
    pub fn arguments(&self) -> &[DataEntry] {
        &self.arguments
    }

    /// Returns the encoded argument block (count plus encodings), without the function index.
    ///
    /// Fails with [`bytesrepr::Error::NotRepresentable`] if there are more than `u16::MAX`
    /// arguments.
    pub fn argument_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let count =
            u16::try_from(self.arguments.len()).map_err(|_| bytesrepr::Error::NotRepresentable)?;
        let mut result = Vec::with_capacity(self.serialized_length() - FUNC_IDX_SERIALIZED_LENGTH);
        result.extend_from_slice(&count.to_be_bytes());
        for argument in &self.arguments {
            result.extend_from_slice(&argument.encoded());
        }
        Ok(result)
    }

    /// Decodes a function call from its full wire encoding.
    ///
    /// Fails if any argument is malformed or bytes remain after the last argument.
    pub fn decode(bytes: &[u8]) -> Result<Self, MalformedValue> {
        let result = Self::take(bytes).and_then(|(call, remainder)| {
            if remainder.is_empty() {
                Ok(call)
            } else {
                Err(MalformedValue::TrailingBytes(remainder.len()))
            }
        });
        if let Err(error) = &result {
            warn!(%error, "failed to decode function call");
        }
        result
    }

    fn take(bytes: &[u8]) -> Result<(Self, &[u8]), MalformedValue> {
        let (index, remainder) = FuncIdx::from_bytes(bytes)?;
        let (count, mut remainder) = u16::from_bytes(remainder)?;
        // The smallest argument encoding is 2 bytes (tag plus boolean payload), so a count
        // claiming more than `remainder.len() / 2` arguments cannot be satisfied; never
        // preallocate beyond that.
        let mut arguments = Vec::with_capacity(usize::from(count).min(remainder.len() / 2));
        for _ in 0..count {
            let (argument, rest) = DataEntry::take(remainder)?;
            arguments.push(argument);
            remainder = rest;
        }
        Ok((FunctionCall { index, arguments }, remainder))
    }
}

impl ToBytes for FunctionCall {
    fn to_bytes(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        let mut result = bytesrepr::allocate_buffer(self)?;
        self.index.write_bytes(&mut result)?;
        result.extend_from_slice(&self.argument_bytes()?);
        Ok(result)
    }

    fn serialized_length(&self) -> usize {
        FUNC_IDX_SERIALIZED_LENGTH
            + U16_SERIALIZED_LENGTH
            + self
                .arguments
                .iter()
                .map(ToBytes::serialized_length)
                .sum::<usize>()
    }
}

impl FromBytes for FunctionCall {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), bytesrepr::Error> {
        Self::take(bytes).map_err(|error| match error {
            MalformedValue::Stream(stream_error) => stream_error,
            _ => bytesrepr::Error::Formatting,
        })
    }
}
