use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct DialogueScriptError {
    pub code: String,
    pub message: String,
    pub line: Option<usize>,
}

impl DialogueScriptError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(code: impl Into<String>, message: impl Into<String>, line: usize) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: Some(line),
        }
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn display_joins_code_and_message() {
        let error = DialogueScriptError::new("ROSTER_DUPLICATE_NAME", "Alice already exists.");
        assert_eq!(error.to_string(), "ROSTER_DUPLICATE_NAME: Alice already exists.");
        assert_eq!(error.line, None);
    }

    #[test]
    fn with_line_keeps_line_number() {
        let error = DialogueScriptError::with_line("X", "y", 3);
        assert_eq!(error.line, Some(3));
    }
}
