use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::format::WarningFormatter;
use crate::format::default::DefaultFormatter;
use crate::format::normalize::NormalizingFormatter;
use crate::warning::model::WarningRecord;

/// Writes normalized warning text to an output sink.
///
/// One write per warning; no routing, no buffering beyond the sink's own.
pub struct Emitter<W: Write> {
    sink: W,
    formatter: NormalizingFormatter,
}

impl Emitter<io::Stderr> {
    /// The conventional target: default formatter, writing to stderr.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), DefaultFormatter)
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W, formatter: impl WarningFormatter + 'static) -> Self {
        Self {
            sink,
            formatter: NormalizingFormatter::new(formatter),
        }
    }

    /// Format `record`, then write the text to the sink.
    ///
    /// Formatting failures and I/O failures both propagate; nothing is
    /// written when formatting fails.
    pub fn emit(&mut self, record: &WarningRecord) -> Result<()> {
        let text = self
            .formatter
            .format(record)
            .context("failed to format warning")?;

        self.sink
            .write_all(text.as_bytes())
            .context("failed to write warning to sink")?;
        self.sink.flush().context("failed to flush warning sink")?;

        Ok(())
    }

    /// Consume the emitter and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::output::FormatterOutput;
    use crate::warning::model::WarningCategory;

    #[test]
    fn writes_exactly_the_normalized_text() {
        let mut emitter = Emitter::new(Vec::new(), DefaultFormatter);
        let record = WarningRecord::new(WarningCategory::User, "deprecated", "lib.rs", 7);

        emitter.emit(&record).unwrap();

        let written = emitter.into_inner();
        assert_eq!(written, b"lib.rs:7: UserWarning: deprecated\n");
    }

    #[test]
    fn byte_producing_formatter_still_yields_text_on_the_sink() {
        let mut emitter = Emitter::new(Vec::new(), |record: &WarningRecord| {
            FormatterOutput::Bytes(format!("{}: {}\n", record.category, record.message).into_bytes())
        });
        let record = WarningRecord::new(WarningCategory::Runtime, "slow path", "worker.rs", 42);

        emitter.emit(&record).unwrap();

        let written = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(written, "RuntimeWarning: slow path\n");
    }

    #[test]
    fn nothing_is_written_when_formatting_fails() {
        let mut emitter = Emitter::new(Vec::new(), |_: &WarningRecord| {
            FormatterOutput::opaque(-1_i32)
        });
        let record = WarningRecord::new(WarningCategory::User, "deprecated", "lib.rs", 7);

        assert!(emitter.emit(&record).is_err());
        assert!(emitter.into_inner().is_empty());
    }

    #[test]
    fn consecutive_warnings_append_in_order() {
        let mut emitter = Emitter::new(Vec::new(), DefaultFormatter);

        emitter
            .emit(&WarningRecord::new(WarningCategory::User, "first", "a.rs", 1))
            .unwrap();
        emitter
            .emit(&WarningRecord::new(WarningCategory::User, "second", "a.rs", 2))
            .unwrap();

        let written = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            written,
            "a.rs:1: UserWarning: first\na.rs:2: UserWarning: second\n"
        );
    }
}
