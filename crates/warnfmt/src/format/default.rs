use crate::format::WarningFormatter;
use crate::format::output::FormatterOutput;
use crate::warning::model::WarningRecord;

/// Renders the conventional `file:line: Category: message` layout.
///
/// This is the formatter the process starts with when nothing else has
/// been installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl WarningFormatter for DefaultFormatter {
    fn format(&self, record: &WarningRecord) -> FormatterOutput {
        let mut out = String::new();
        out.push_str(&format!(
            "{}:{}: {}: {}\n",
            record.file, record.line, record.category, record.message
        ));

        // The source line is echoed trimmed and indented; an all-whitespace
        // line is omitted entirely.
        if let Some(line) = &record.source_line {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                out.push_str(&format!("  {trimmed}\n"));
            }
        }

        FormatterOutput::Text(out)
    }
}
