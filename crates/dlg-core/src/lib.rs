pub mod diagnostic;
pub mod error;
pub mod types;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::DialogueScriptError;
pub use types::*;
