//! Contains serialization and deserialization code for the types used throughout the system.
//!
//! All multi-byte integers are encoded big-endian (network byte order) and variable-length
//! payloads carry a `u16` big-endian length prefix, per the Meridian state-storage convention.

use alloc::vec::Vec;
use core::{
    convert::TryInto,
    fmt::{self, Display, Formatter},
};

/// The number of bytes in a serialized [`bool`].
pub const BOOL_SERIALIZED_LENGTH: usize = 1;
/// The number of bytes in a serialized [`u8`].
pub const U8_SERIALIZED_LENGTH: usize = 1;
/// The number of bytes in a serialized [`u16`].
pub const U16_SERIALIZED_LENGTH: usize = 2;
/// The number of bytes in a serialized [`u32`].
pub const U32_SERIALIZED_LENGTH: usize = 4;
/// The number of bytes in a serialized [`u64`].
pub const U64_SERIALIZED_LENGTH: usize = 8;
/// The number of bytes in a serialized [`i64`].
pub const I64_SERIALIZED_LENGTH: usize = 8;

/// A type which can be serialized to a `Vec<u8>`.
pub trait ToBytes {
    /// Serializes `&self` to a `Vec<u8>`.
    fn to_bytes(&self) -> Result<Vec<u8>, Error>;

    /// Consumes `self` and serializes to a `Vec<u8>`.
    fn into_bytes(self) -> Result<Vec<u8>, Error>
    where
        Self: Sized,
    {
        self.to_bytes()
    }

    /// Returns the length of the `Vec<u8>` which would be returned from a successful call to
    /// `to_bytes()` or `into_bytes()`.  The data is not actually serialized, so this call is
    /// relatively cheap.
    fn serialized_length(&self) -> usize;

    /// Writes `&self` into a mutable `writer`.
    fn write_bytes(&self, writer: &mut Vec<u8>) -> Result<(), Error> {
        writer.append(&mut self.to_bytes()?);
        Ok(())
    }
}

/// A type which can be deserialized from a `Vec<u8>`.
pub trait FromBytes: Sized {
    /// Deserializes the slice into `Self`, returning the remaining unparsed bytes.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error>;
}

/// Serialization and deserialization errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Error {
    /// Early end of stream while deserializing.
    EarlyEndOfStream = 0,
    /// Formatting error while deserializing.
    Formatting,
    /// Not all input bytes were consumed.
    LeftOverBytes,
    /// Length exceeds the maximum representable by the protocol's length prefix.
    NotRepresentable,
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Error::EarlyEndOfStream => {
                formatter.write_str("Deserialization error: early end of stream")
            }
            Error::Formatting => formatter.write_str("Deserialization error: formatting"),
            Error::LeftOverBytes => formatter.write_str("Deserialization error: left-over bytes"),
            Error::NotRepresentable => {
                formatter.write_str("Serialization error: length not representable")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Serializes `t` into a `Vec<u8>`.
pub fn serialize(t: impl ToBytes) -> Result<Vec<u8>, Error> {
    t.into_bytes()
}

/// Deserializes `bytes` into an instance of `T`.
///
/// Returns an error if the bytes cannot be deserialized into `T` or if not all of the input bytes
/// are consumed in the operation.
pub fn deserialize<T: FromBytes>(bytes: &[u8]) -> Result<T, Error> {
    let (t, remainder) = T::from_bytes(bytes)?;
    if remainder.is_empty() {
        Ok(t)
    } else {
        Err(Error::LeftOverBytes)
    }
}

/// Returns a `Vec<u8>` initialized with sufficient capacity to hold `to_be_serialized` after
/// serialization.
pub fn allocate_buffer<T: ToBytes>(to_be_serialized: &T) -> Result<Vec<u8>, Error> {
    Ok(Vec::with_capacity(to_be_serialized.serialized_length()))
}

/// Safely splits the slice at the given point.
pub(crate) fn safe_split_at(bytes: &[u8], n: usize) -> Result<(&[u8], &[u8]), Error> {
    if n > bytes.len() {
        Err(Error::EarlyEndOfStream)
    } else {
        Ok(bytes.split_at(n))
    }
}

/// Writes `slice` prefixed with its length as a big-endian `u16` into `writer`.
pub fn write_u16_prefixed(slice: &[u8], writer: &mut Vec<u8>) -> Result<(), Error> {
    let length: u16 = slice.len().try_into().map_err(|_| Error::NotRepresentable)?;
    writer.extend_from_slice(&length.to_be_bytes());
    writer.extend_from_slice(slice);
    Ok(())
}

/// Reads a `u16` big-endian length prefix and returns that many bytes along with the remainder.
pub fn read_u16_prefixed(bytes: &[u8]) -> Result<(&[u8], &[u8]), Error> {
    let (length, remainder) = u16::from_bytes(bytes)?;
    safe_split_at(remainder, usize::from(length))
}

/// Returns the serialized length of `slice` when written via [`write_u16_prefixed`].
pub fn u16_prefixed_serialized_length(slice: &[u8]) -> usize {
    U16_SERIALIZED_LENGTH + slice.len()
}

macro_rules! impl_bytesrepr_for_uint {
    ($type:ty, $length:ident) => {
        impl ToBytes for $type {
            fn to_bytes(&self) -> Result<Vec<u8>, Error> {
                Ok(self.to_be_bytes().to_vec())
            }

            fn serialized_length(&self) -> usize {
                $length
            }

            fn write_bytes(&self, writer: &mut Vec<u8>) -> Result<(), Error> {
                writer.extend_from_slice(&self.to_be_bytes());
                Ok(())
            }
        }

        impl FromBytes for $type {
            fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
                let (be_bytes, remainder) = safe_split_at(bytes, $length)?;
                // The split guarantees the conversion cannot fail.
                let be_bytes = be_bytes.try_into().map_err(|_| Error::Formatting)?;
                Ok((<$type>::from_be_bytes(be_bytes), remainder))
            }
        }
    };
}

impl_bytesrepr_for_uint!(u8, U8_SERIALIZED_LENGTH);
impl_bytesrepr_for_uint!(u16, U16_SERIALIZED_LENGTH);
impl_bytesrepr_for_uint!(u32, U32_SERIALIZED_LENGTH);
impl_bytesrepr_for_uint!(u64, U64_SERIALIZED_LENGTH);
impl_bytesrepr_for_uint!(i64, I64_SERIALIZED_LENGTH);

impl ToBytes for bool {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        u8::from(*self).to_bytes()
    }

    fn serialized_length(&self) -> usize {
        BOOL_SERIALIZED_LENGTH
    }
}

impl FromBytes for bool {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        match bytes.split_first() {
            None => Err(Error::EarlyEndOfStream),
            Some((byte, remainder)) => match byte {
                0 => Ok((false, remainder)),
                1 => Ok((true, remainder)),
                _ => Err(Error::Formatting),
            },
        }
    }
}

impl<const COUNT: usize> ToBytes for [u8; COUNT] {
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(self.to_vec())
    }

    fn serialized_length(&self) -> usize {
        COUNT
    }

    fn write_bytes(&self, writer: &mut Vec<u8>) -> Result<(), Error> {
        writer.extend_from_slice(self);
        Ok(())
    }
}

impl<const COUNT: usize> FromBytes for [u8; COUNT] {
    fn from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        let (bytes, remainder) = safe_split_at(bytes, COUNT)?;
        let mut result = [0u8; COUNT];
        result.copy_from_slice(bytes);
        Ok((result, remainder))
    }
}

/// Asserts that `t` serializes, deserializes back to an equal value, and that the serialized
/// length matches `serialized_length()`.
#[cfg(any(feature = "gens", test))]
#[track_caller]
pub fn test_serialization_roundtrip<T>(t: &T)
where
    T: ToBytes + FromBytes + PartialEq + core::fmt::Debug,
{
    let serialized = t.to_bytes().expect("should serialize");
    assert_eq!(serialized.len(), t.serialized_length());
    let deserialized: T = deserialize(&serialized).expect("should deserialize");
    assert_eq!(*t, deserialized);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_integers() {
        for value in [0u8, 1, u8::MAX] {
            test_serialization_roundtrip(&value);
        }
        for value in [0u16, 1, 0x1234, u16::MAX] {
            test_serialization_roundtrip(&value);
        }
        for value in [0u32, 1, 0xdead_beef, u32::MAX] {
            test_serialization_roundtrip(&value);
        }
        for value in [0u64, 1, u64::MAX] {
            test_serialization_roundtrip(&value);
        }
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            test_serialization_roundtrip(&value);
        }
    }

    #[test]
    fn should_serialize_big_endian() {
        assert_eq!(0x0102u16.to_bytes().unwrap(), vec![0x01, 0x02]);
        assert_eq!(0x01020304u32.to_bytes().unwrap(), vec![0x01, 0x02, 0x03, 0x04]);
        assert_eq!(
            0x0102030405060708u64.to_bytes().unwrap(),
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );
        assert_eq!(
            (-2i64).to_bytes().unwrap(),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]
        );
    }

    #[test]
    fn should_reject_invalid_bool_byte() {
        assert_eq!(deserialize::<bool>(&[2]), Err(Error::Formatting));
        assert_eq!(deserialize::<bool>(&[]), Err(Error::EarlyEndOfStream));
        assert_eq!(deserialize::<bool>(&[0]), Ok(false));
        assert_eq!(deserialize::<bool>(&[1]), Ok(true));
    }

    #[test]
    fn should_reject_leftover_bytes() {
        assert_eq!(deserialize::<u16>(&[0, 1, 2]), Err(Error::LeftOverBytes));
    }

    #[test]
    fn should_reject_early_end_of_stream() {
        assert_eq!(deserialize::<u32>(&[0, 1, 2]), Err(Error::EarlyEndOfStream));
        assert_eq!(<[u8; 4]>::from_bytes(&[0, 1, 2]), Err(Error::EarlyEndOfStream));
    }

    #[test]
    fn should_roundtrip_u16_prefixed_slices() {
        for payload in [&[][..], &[42][..], &[7; 300][..]] {
            let mut buffer = Vec::new();
            write_u16_prefixed(payload, &mut buffer).unwrap();
            assert_eq!(buffer.len(), u16_prefixed_serialized_length(payload));
            let (read, remainder) = read_u16_prefixed(&buffer).unwrap();
            assert_eq!(read, payload);
            assert!(remainder.is_empty());
        }
    }

    #[test]
    fn should_reject_over_long_prefixed_slice() {
        let payload = vec![0u8; usize::from(u16::MAX) + 1];
        let mut buffer = Vec::new();
        assert_eq!(
            write_u16_prefixed(&payload, &mut buffer),
            Err(Error::NotRepresentable)
        );
    }

    #[test]
    fn should_reject_truncated_prefixed_slice() {
        // Prefix claims 4 bytes, only 2 present.
        assert_eq!(read_u16_prefixed(&[0, 4, 1, 2]), Err(Error::EarlyEndOfStream));
    }
}
