use serde::Serialize;

/// Parsed line as printed by `dlg parse`, with the speaker resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct LineReport<'a> {
    pub(crate) speaker: &'a str,
    pub(crate) span: u32,
    pub(crate) content: &'a str,
}
