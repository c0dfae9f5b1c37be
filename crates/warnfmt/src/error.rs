use thiserror::Error;

/// Failures produced while normalizing formatter output.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The wrapped formatter returned a value that is neither text nor an
    /// encoded byte sequence. There is no safe default rendering to fall
    /// back to, so this propagates to the caller of the capability.
    #[error("not expecting formatter result type '{type_name}'")]
    UnsupportedResultType { type_name: &'static str },

    /// Strict decoding rejected the byte sequence. The lossy default
    /// decoding never produces this.
    #[error("formatter produced bytes that are not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },
}
