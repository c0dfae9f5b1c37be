pub mod default;
pub mod normalize;
pub mod output;

use crate::format::output::FormatterOutput;
use crate::warning::model::WarningRecord;

/// The "original formatter" capability: renders a warning occurrence into a
/// displayable form.
///
/// Implementations are opaque collaborators. They may hand back text or an
/// encoded byte sequence; [`normalize::NormalizingFormatter`] is the layer
/// that guarantees callers only ever see text.
pub trait WarningFormatter: Send + Sync {
    fn format(&self, record: &WarningRecord) -> FormatterOutput;
}

impl<F> WarningFormatter for F
where
    F: Fn(&WarningRecord) -> FormatterOutput + Send + Sync,
{
    fn format(&self, record: &WarningRecord) -> FormatterOutput {
        self(record)
    }
}
