mod session;

pub use dlg_generator::{check_config, check_roster, generate_script};
pub use dlg_parser::{parse_dialogue, word_count, SPAN_PER_WORD};
pub use session::DialogueSession;

use dlg_core::{Diagnostic, DialogueLine, DialogueScriptError, Roster, ScriptConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub script: String,
    pub lines: Vec<DialogueLine>,
    pub diagnostics: Vec<Diagnostic>,
}

/// One-shot conversion: checks, parse, then generate.
pub fn parse_and_generate(
    raw_text: &str,
    roster: &Roster,
    config: &ScriptConfig,
) -> Result<GenerateResult, DialogueScriptError> {
    let mut diagnostics = check_roster(roster);
    diagnostics.extend(check_config(config));

    let parsed = parse_dialogue(raw_text, roster);
    diagnostics.extend(parsed.diagnostics);

    let script = generate_script(config, roster, &parsed.lines)?;
    Ok(GenerateResult {
        script,
        lines: parsed.lines,
        diagnostics,
    })
}
