//! Base58 encoding (Bitcoin alphabet), the canonical text form for addresses, token identifiers
//! and opaque byte payloads at the API boundary.

use alloc::{string::String, vec::Vec};

use crate::data_entry::InvalidFormat;

/// Returns the base58 encoding of `input`.
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    bs58::encode(input.as_ref()).into_string()
}

/// Decodes a base58 string into its raw bytes.
pub fn decode(input: &str) -> Result<Vec<u8>, InvalidFormat> {
    bs58::decode(input)
        .into_vec()
        .map_err(InvalidFormat::Base58)
}

/// Decodes a base58 string into a fixed-length byte array, rejecting any other decoded length.
pub fn decode_fixed<const COUNT: usize>(input: &str) -> Result<[u8; COUNT], InvalidFormat> {
    let decoded = decode(input)?;
    if decoded.len() != COUNT {
        return Err(InvalidFormat::UnexpectedLength {
            expected: COUNT,
            actual: decoded.len(),
        });
    }
    let mut result = [0u8; COUNT];
    result.copy_from_slice(&decoded);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_arbitrary_bytes() {
        for payload in [&[][..], &[0, 0, 1][..], &[255; 26][..]] {
            let encoded = encode(payload);
            assert_eq!(decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn should_reject_invalid_characters() {
        // '0', 'O', 'I' and 'l' are not in the Bitcoin alphabet.
        assert!(matches!(decode("0OIl"), Err(InvalidFormat::Base58(_))));
        assert!(matches!(decode("!!!"), Err(InvalidFormat::Base58(_))));
    }

    #[test]
    fn should_enforce_decoded_length() {
        let encoded = encode([7u8; 26]);
        assert_eq!(decode_fixed::<26>(&encoded).unwrap(), [7u8; 26]);
        assert_eq!(
            decode_fixed::<32>(&encoded),
            Err(InvalidFormat::UnexpectedLength {
                expected: 32,
                actual: 26
            })
        );
    }
}
