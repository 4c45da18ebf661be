//! UTF-8 helpers for string fields.
//!
//! On the encode side there is nothing to compute: `&str` is valid UTF-8 by
//! construction, so the wire length of a string is exactly `s.len()` and no
//! surrogate validation can fail at this layer (lone surrogates are not
//! representable in `&str` at all). Non-BMP code points occupy four bytes,
//! as the wire format requires.
//!
//! The decode side is where the work is: bytes arriving off the wire are
//! untrusted and must be validated before they become text.

use crate::error::{Result, WireError};

/// Wire length in bytes of `s` when written as a string field payload.
#[inline]
pub fn encoded_len(s: &str) -> usize {
    s.len()
}

/// Wire length of a single code point.
#[inline]
pub fn encoded_len_of_char(c: char) -> usize {
    c.len_utf8()
}

/// Validate `bytes` as UTF-8, borrowing the result.
#[inline]
pub fn validate(bytes: &[u8]) -> Result<&str> {
    core::str::from_utf8(bytes).map_err(|_| WireError::Malformed("invalid UTF-8 in string field"))
}

/// Validate an owned byte vector as UTF-8 without copying it.
#[inline]
pub fn into_string(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| WireError::Malformed("invalid UTF-8 in string field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_counts_bytes_not_chars() {
        assert_eq!(encoded_len(""), 0);
        assert_eq!(encoded_len("abc"), 3);
        assert_eq!(encoded_len("é"), 2);
        assert_eq!(encoded_len("丈"), 3);
        assert_eq!(encoded_len("🦀"), 4); // non-BMP: four bytes
        assert_eq!(encoded_len_of_char('🦀'), 4);
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        assert_eq!(validate("grüße 🦀".as_bytes()).unwrap(), "grüße 🦀");
        assert_eq!(into_string(b"plain".to_vec()).unwrap(), "plain");
    }

    #[test]
    fn validate_rejects_broken_sequences() {
        // Truncated two-byte sequence.
        assert!(matches!(
            validate(&[0xC3]),
            Err(WireError::Malformed(_))
        ));
        // UTF-16 surrogate half encoded as three bytes (CESU-8 style) is not
        // valid UTF-8.
        assert!(matches!(
            validate(&[0xED, 0xA0, 0x80]),
            Err(WireError::Malformed(_))
        ));
        assert!(matches!(
            into_string(vec![0xFF, 0xFE]),
            Err(WireError::Malformed(_))
        ));
    }
}
