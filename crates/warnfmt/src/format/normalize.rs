//! Normalization layer over an original formatter.
//!
//! This module guarantees that whatever a wrapped formatter produces, the
//! caller only ever receives text.
//!
//! Responsibilities:
//! - Pass text results through untouched
//! - Decode byte-sequence results under the configured decoding
//! - Reject results of any other runtime type
//!
//! Non-responsibilities:
//! - Rendering warnings (handled by the wrapped formatter)
//! - Writing warnings anywhere (handled by `emit`)
//! - Choosing which formatter the process uses (handled by `hook`)
//!
//! The wrapper is stateless and synchronous: one pass, no retries, no
//! partial failure.

use crate::error::FormatError;
use crate::format::WarningFormatter;
use crate::format::output::FormatterOutput;
use crate::warning::model::WarningRecord;

/// How byte-sequence results are decoded into text.
///
/// The default is UTF-8 with replacement of invalid sequences, so decoding
/// never fails. Callers who want invalid input surfaced instead can opt
/// into the strict mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteDecoding {
    /// UTF-8; invalid sequences become U+FFFD.
    #[default]
    Utf8Lossy,
    /// UTF-8; invalid sequences fail with [`FormatError::InvalidUtf8`].
    Utf8Strict,
}

/// Wraps an original formatter and coerces its result to text.
pub struct NormalizingFormatter {
    inner: Box<dyn WarningFormatter>,
    decoding: ByteDecoding,
}

impl NormalizingFormatter {
    pub fn new(inner: impl WarningFormatter + 'static) -> Self {
        Self::with_decoding(inner, ByteDecoding::default())
    }

    pub fn with_decoding(inner: impl WarningFormatter + 'static, decoding: ByteDecoding) -> Self {
        Self {
            inner: Box::new(inner),
            decoding,
        }
    }

    /// Format `record` through the wrapped formatter and normalize the result.
    ///
    /// - text passes through unchanged
    /// - bytes are decoded under the configured [`ByteDecoding`]
    /// - anything else fails with [`FormatError::UnsupportedResultType`]
    pub fn format(&self, record: &WarningRecord) -> Result<String, FormatError> {
        match self.inner.format(record) {
            FormatterOutput::Text(s) => Ok(s),
            FormatterOutput::Bytes(b) => self.decode(b),
            FormatterOutput::Opaque { type_name, .. } => {
                Err(FormatError::UnsupportedResultType { type_name })
            }
        }
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String, FormatError> {
        match self.decoding {
            ByteDecoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            ByteDecoding::Utf8Strict => Ok(String::from_utf8(bytes)?),
        }
    }
}

impl std::fmt::Debug for NormalizingFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizingFormatter")
            .field("decoding", &self.decoding)
            .finish()
    }
}
