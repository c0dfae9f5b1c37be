pub mod emit;
pub mod error;
pub mod format;
pub mod hook;
pub mod warning;

use crate::error::FormatError;
use crate::warning::model::WarningRecord;

/// Format a warning occurrence through the process-wide capability.
///
/// Routes through whatever formatter was installed via [`hook::install`],
/// falling back to the built-in default formatter when nothing was.
/// The returned value is always text, never an encoded byte sequence.
pub fn format_warning(record: &WarningRecord) -> Result<String, FormatError> {
    hook::format_warning(record)
}
