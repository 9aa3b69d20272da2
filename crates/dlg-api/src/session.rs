use dlg_core::{
    CharacterDraft, CharacterId, Diagnostic, DiagnosticKind, DialogueLine, DialogueScriptError,
    Roster, ScriptConfig,
};
use dlg_generator::{check_config, check_roster, generate_script};
use dlg_parser::parse_dialogue;

/// Owns the roster and the dialogue list a front end edits. Every change
/// goes through a method here; callers only get shared views.
#[derive(Debug, Clone, Default)]
pub struct DialogueSession {
    roster: Roster,
    dialogues: Vec<DialogueLine>,
}

impl DialogueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            dialogues: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn dialogues(&self) -> &[DialogueLine] {
        &self.dialogues
    }

    pub fn add_character(
        &mut self,
        draft: CharacterDraft,
    ) -> Result<CharacterId, DialogueScriptError> {
        self.roster.add(draft)
    }

    pub fn update_character(
        &mut self,
        id: CharacterId,
        draft: CharacterDraft,
    ) -> Result<(), DialogueScriptError> {
        self.roster.update(id, draft)
    }

    /// Replaces the dialogue list with a fresh parse of `raw_text`.
    pub fn load_dialogue(&mut self, raw_text: &str) -> Vec<Diagnostic> {
        let parsed = parse_dialogue(raw_text, &self.roster);
        self.dialogues = parsed.lines;
        parsed.diagnostics
    }

    /// Appends an empty line spoken by the character called `name` and
    /// returns its index.
    pub fn append_line_for(&mut self, name: &str) -> Result<usize, Diagnostic> {
        let Some(character) = self.roster.find_by_name(name) else {
            return Err(Diagnostic::new(
                DiagnosticKind::MissingUserForManualAddition,
                format!("No character named \"{}\"; nothing was added.", name),
            ));
        };
        self.dialogues.push(DialogueLine {
            speaker: character.id,
            span: 0,
            content: String::new(),
        });
        Ok(self.dialogues.len() - 1)
    }

    pub fn set_span(&mut self, index: usize, span: u32) -> Result<(), DialogueScriptError> {
        self.line_mut(index)?.span = span;
        Ok(())
    }

    pub fn set_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
    ) -> Result<(), DialogueScriptError> {
        self.line_mut(index)?.content = content.into();
        Ok(())
    }

    pub fn clear_dialogues(&mut self) {
        self.dialogues.clear();
    }

    pub fn generate(&self, config: &ScriptConfig) -> Result<String, DialogueScriptError> {
        generate_script(config, &self.roster, &self.dialogues)
    }

    pub fn check(&self, config: &ScriptConfig) -> Vec<Diagnostic> {
        let mut diagnostics = check_roster(&self.roster);
        diagnostics.extend(check_config(config));
        diagnostics
    }

    fn line_mut(&mut self, index: usize) -> Result<&mut DialogueLine, DialogueScriptError> {
        let len = self.dialogues.len();
        self.dialogues.get_mut(index).ok_or_else(|| {
            DialogueScriptError::new(
                "SESSION_LINE_OUT_OF_RANGE",
                format!("Dialogue line {} does not exist ({} lines).", index, len),
            )
        })
    }
}
