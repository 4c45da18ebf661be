//! Error type shared by every fallible operation in the runtime.
//!
//! All `read_*` / `write_*` primitives, the parser and writer libraries, and
//! generated codecs return [`WireError`] through the crate-wide [`Result`]
//! alias. Errors propagate unchanged through `parse` / `write` /
//! `measure_record`; nothing in the runtime retries or recovers.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, WireError>;

/// Every way a wire-format operation can fail.
#[derive(Debug, Error)]
pub enum WireError {
    /// The input violates the protobuf encoding itself: a varint longer than
    /// 10 bytes, a group wire type, invalid UTF-8 in a string field, a bool
    /// encoded with a value greater than 1, or a zero field number.
    #[error("malformed protobuf: {0}")]
    Malformed(&'static str),

    /// A length-delimited field announced more bytes than the caller allows.
    #[error("length-delimited field of {length} bytes exceeds the maximum of {max}")]
    SizeExceeded {
        /// Length announced by the wire prefix.
        length: u64,
        /// Caller-supplied ceiling.
        max: u64,
    },

    /// A mandatory read ran past the readable limit or hit end of stream.
    ///
    /// End of data *at a tag boundary* is not reported through this variant;
    /// `read_tag` returns `Ok(None)` there instead.
    #[error("read past the end of the available data")]
    BufferUnderflow,

    /// A write ran past the limit of a fixed-size buffer.
    #[error("write past the limit of a fixed-size buffer")]
    BufferOverflow,

    /// An unknown field number was encountered and the parse flags forbid
    /// skipping it.
    #[error("unexpected field number {0}")]
    UnexpectedField(i32),

    /// Message nesting ran deeper than the `max_depth` handed to `parse`.
    #[error("nested message depth exceeds the configured maximum")]
    DepthExceeded,

    /// The caller asked for something the operation cannot do, independent of
    /// input bytes (e.g. extracting a repeated field as a single blob).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The underlying stream failed for a reason other than clean end of
    /// input.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl WireError {
    /// True for errors caused by the encoded bytes rather than by the caller
    /// or the environment. Useful when deciding whether to quarantine a
    /// payload versus surfacing a programming error.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            WireError::Malformed(_)
                | WireError::SizeExceeded { .. }
                | WireError::BufferUnderflow
                | WireError::UnexpectedField(_)
                | WireError::DepthExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offense() {
        let e = WireError::Malformed("varint exceeds 10 bytes");
        assert_eq!(e.to_string(), "malformed protobuf: varint exceeds 10 bytes");

        let e = WireError::SizeExceeded { length: 4096, max: 16 };
        assert!(e.to_string().contains("4096"));
        assert!(e.to_string().contains("16"));
    }

    #[test]
    fn data_error_classification() {
        assert!(WireError::BufferUnderflow.is_data_error());
        assert!(WireError::DepthExceeded.is_data_error());
        assert!(!WireError::BufferOverflow.is_data_error());
        assert!(!WireError::InvalidArgument("x").is_data_error());
    }
}
