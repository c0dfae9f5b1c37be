use serde::{Deserialize, Serialize};

/// A single warning occurrence to be rendered.
///
/// Produced fresh on every emission; never persisted and never shared
/// across formatting calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningRecord {
    pub category: WarningCategory,
    pub message: String,
    /// Source file the warning points at (informational only).
    pub file: String,
    pub line: u32,
    /// The offending source line, when the emitter had it available.
    pub source_line: Option<String>,
}

impl WarningRecord {
    pub fn new(
        category: WarningCategory,
        message: impl Into<String>,
        file: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            file: file.into(),
            line,
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }
}

/// Conventional warning categories, with an escape hatch for anything
/// outside the closed set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WarningCategory {
    User,
    Deprecation,
    Runtime,
    Future,
    Syntax,
    Other(String),
}

impl std::fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WarningCategory::User => "UserWarning",
            WarningCategory::Deprecation => "DeprecationWarning",
            WarningCategory::Runtime => "RuntimeWarning",
            WarningCategory::Future => "FutureWarning",
            WarningCategory::Syntax => "SyntaxWarning",
            WarningCategory::Other(name) => name.as_str(),
        };
        write!(f, "{name}")
    }
}
