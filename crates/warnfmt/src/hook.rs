//! Process-wide "format a warning" capability.
//!
//! The slot is rebound at most once per process lifetime: the first
//! [`install`] wraps the supplied formatter in a normalizer and wins; every
//! later install is inert. There is no unregister operation.
//!
//! Concurrency: the slot is written once and only read afterwards, so any
//! number of threads may format warnings concurrently. Thread safety of the
//! wrapped formatter itself is inherited from its `Send + Sync` bounds, not
//! enforced here.

use std::sync::OnceLock;

use crate::error::FormatError;
use crate::format::WarningFormatter;
use crate::format::default::DefaultFormatter;
use crate::format::normalize::NormalizingFormatter;
use crate::warning::model::WarningRecord;

static FORMATTER: OnceLock<NormalizingFormatter> = OnceLock::new();

/// Install `formatter` as the process-wide capability, wrapped in a
/// normalizer.
///
/// Returns `true` when this call performed the rebinding. A `false` return
/// means a normalizer was already installed and this call changed nothing.
pub fn install(formatter: impl WarningFormatter + 'static) -> bool {
    let mut installed = false;
    FORMATTER.get_or_init(|| {
        installed = true;
        NormalizingFormatter::new(formatter)
    });
    installed
}

pub fn is_installed() -> bool {
    FORMATTER.get().is_some()
}

/// Format `record` through the installed normalizer.
///
/// Before any install, falls back to a normalized [`DefaultFormatter`], so
/// the text guarantee holds from process start.
pub fn format_warning(record: &WarningRecord) -> Result<String, FormatError> {
    match FORMATTER.get() {
        Some(formatter) => formatter.format(record),
        None => NormalizingFormatter::new(DefaultFormatter).format(record),
    }
}
