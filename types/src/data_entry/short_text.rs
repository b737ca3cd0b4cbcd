use alloc::string::String;
use core::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use super::{InvalidFormat, MAX_SHORT_PAYLOAD_LENGTH};

/// A UTF-8 string whose byte length fits the wire format's `u16` prefix.
///
/// Validated at construction, so encoding an already constructed value cannot fail.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortText(String);

impl ShortText {
    /// Constructs a new `ShortText`, rejecting input longer than
    /// [`MAX_SHORT_PAYLOAD_LENGTH`] bytes.
    pub fn try_new(text: String) -> Result<Self, InvalidFormat> {
        if text.len() > MAX_SHORT_PAYLOAD_LENGTH {
            return Err(InvalidFormat::TooLong {
                max: MAX_SHORT_PAYLOAD_LENGTH,
                actual: text.len(),
            });
        }
        Ok(ShortText(text))
    }

    pub(crate) fn new_unchecked(text: String) -> Self {
        debug_assert!(text.len() <= MAX_SHORT_PAYLOAD_LENGTH);
        ShortText(text)
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the byte length of the text.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ShortText {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl TryFrom<String> for ShortText {
    type Error = InvalidFormat;

    fn try_from(text: String) -> Result<Self, InvalidFormat> {
        ShortText::try_new(text)
    }
}

impl From<ShortText> for String {
    fn from(text: ShortText) -> Self {
        text.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_up_to_max_length() {
        let text = "y".repeat(MAX_SHORT_PAYLOAD_LENGTH);
        assert!(ShortText::try_new(text).is_ok());
    }

    #[test]
    fn should_reject_over_long_text() {
        let text = "y".repeat(MAX_SHORT_PAYLOAD_LENGTH + 1);
        assert_eq!(
            ShortText::try_new(text),
            Err(InvalidFormat::TooLong {
                max: MAX_SHORT_PAYLOAD_LENGTH,
                actual: MAX_SHORT_PAYLOAD_LENGTH + 1
            })
        );
    }
}
