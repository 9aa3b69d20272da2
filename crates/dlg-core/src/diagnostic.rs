use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Speaker tag matched no roster entry; the line was dropped.
    UnresolvedSpeaker,
    /// Non-speaker line before the first recognized speaker; the line was dropped.
    OrphanContinuationLine,
    /// Manual line requested for a character name the roster lacks.
    MissingUserForManualAddition,
    /// Script prefix repeats an earlier character's prefix.
    DuplicateScriptPrefix,
    /// Objective name would not survive as a scoreboard objective.
    InvalidObjectiveName,
}

impl DiagnosticKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::UnresolvedSpeaker => "PARSE_UNRESOLVED_SPEAKER",
            Self::OrphanContinuationLine => "PARSE_ORPHAN_CONTINUATION",
            Self::MissingUserForManualAddition => "SESSION_MISSING_USER",
            Self::DuplicateScriptPrefix => "ROSTER_DUPLICATE_PREFIX",
            Self::InvalidObjectiveName => "CONFIG_INVALID_OBJECTIVE",
        }
    }
}

/// Recoverable finding reported next to a primary result. The input it
/// names was dropped or looks suspicious; the operation still completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based source line, when the finding comes from dialogue text.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.code(), line, self.message),
            None => write!(f, "{}: {}", self.code(), self.message),
        }
    }
}
