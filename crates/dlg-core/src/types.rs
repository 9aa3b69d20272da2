use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::DialogueScriptError;

pub const DEFAULT_INITIAL_COUNTER: i64 = 1;
pub const DEFAULT_INITIAL_SPAN: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub script_prefix: String,
    pub content_prefix: String,
}

impl Character {
    pub fn matches_tag(&self, speaker_tag: &str) -> bool {
        self.script_prefix.to_lowercase() == speaker_tag.to_lowercase()
    }
}

/// Editable fields of a character, without its roster-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub name: String,
    pub script_prefix: String,
    pub content_prefix: String,
}

impl CharacterDraft {
    pub fn new(
        name: impl Into<String>,
        script_prefix: impl Into<String>,
        content_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            script_prefix: script_prefix.into(),
            content_prefix: content_prefix.into(),
        }
    }
}

/// Ordered set of characters. Order matters: speaker resolution takes the
/// first prefix match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    characters: Vec<Character>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_drafts(
        drafts: impl IntoIterator<Item = CharacterDraft>,
    ) -> Result<Self, DialogueScriptError> {
        let mut roster = Self::new();
        for draft in drafts {
            roster.add(draft)?;
        }
        Ok(roster)
    }

    pub fn add(&mut self, draft: CharacterDraft) -> Result<CharacterId, DialogueScriptError> {
        self.ensure_name_free(&draft.name, None)?;
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        self.characters.push(Character {
            id,
            name: draft.name,
            script_prefix: draft.script_prefix,
            content_prefix: draft.content_prefix,
        });
        Ok(id)
    }

    pub fn update(
        &mut self,
        id: CharacterId,
        draft: CharacterDraft,
    ) -> Result<(), DialogueScriptError> {
        self.ensure_name_free(&draft.name, Some(id))?;
        let Some(character) = self.characters.iter_mut().find(|entry| entry.id == id) else {
            return Err(unknown_character(id));
        };
        character.name = draft.name;
        character.script_prefix = draft.script_prefix;
        character.content_prefix = draft.content_prefix;
        Ok(())
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|entry| entry.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|entry| entry.name == name)
    }

    /// First character whose script prefix equals `speaker_tag`, ignoring case.
    pub fn resolve_prefix(&self, speaker_tag: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|entry| entry.matches_tag(speaker_tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn ensure_name_free(
        &self,
        name: &str,
        editing: Option<CharacterId>,
    ) -> Result<(), DialogueScriptError> {
        let taken = self
            .characters
            .iter()
            .any(|entry| entry.name == name && Some(entry.id) != editing);
        if taken {
            return Err(DialogueScriptError::new(
                "ROSTER_DUPLICATE_NAME",
                format!("Character \"{}\" is already in the roster.", name),
            ));
        }
        Ok(())
    }
}

pub fn unknown_character(id: CharacterId) -> DialogueScriptError {
    DialogueScriptError::new(
        "ROSTER_UNKNOWN_CHARACTER",
        format!("Character id {} is not in the roster.", id.0),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    pub speaker: CharacterId,
    pub span: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    pub name: String,
    #[serde(default = "default_initial_counter")]
    pub initial_counter: i64,
    #[serde(default = "default_initial_span")]
    pub initial_span: i64,
}

impl ScriptConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_counter: DEFAULT_INITIAL_COUNTER,
            initial_span: DEFAULT_INITIAL_SPAN,
        }
    }
}

fn default_initial_counter() -> i64 {
    DEFAULT_INITIAL_COUNTER
}

fn default_initial_span() -> i64 {
    DEFAULT_INITIAL_SPAN
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub lines: Vec<DialogueLine>,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod types_tests {
    use super::*;

    fn alice() -> CharacterDraft {
        CharacterDraft::new("Alice", "A", "\"Alice: \"")
    }

    #[test]
    fn roster_assigns_increasing_ids_in_insertion_order() {
        let mut roster = Roster::new();
        let a = roster.add(alice()).expect("alice should be added");
        let b = roster
            .add(CharacterDraft::new("Bob", "B", "\"Bob: \""))
            .expect("bob should be added");
        assert_eq!(a, CharacterId(0));
        assert_eq!(b, CharacterId(1));
        let names = roster.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn roster_rejects_duplicate_names() {
        let mut roster = Roster::new();
        roster.add(alice()).expect("first add");
        let error = roster.add(alice()).expect_err("second add should fail");
        assert_eq!(error.code, "ROSTER_DUPLICATE_NAME");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn resolve_prefix_ignores_case_and_takes_first_match() {
        let roster = Roster::from_drafts([
            CharacterDraft::new("Alice", "A", "x"),
            CharacterDraft::new("Ann", "a", "y"),
        ])
        .expect("roster should build");
        assert_eq!(roster.resolve_prefix("a").map(|c| c.name.as_str()), Some("Alice"));
        assert_eq!(roster.resolve_prefix("A").map(|c| c.name.as_str()), Some("Alice"));
        assert!(roster.resolve_prefix("b").is_none());
    }

    #[test]
    fn update_keeps_id_and_allows_same_name() {
        let mut roster = Roster::new();
        let id = roster.add(alice()).expect("add");
        roster
            .update(id, CharacterDraft::new("Alice", "AL", "\"A: \""))
            .expect("update with own name should pass");
        let character = roster.get(id).expect("character should exist");
        assert_eq!(character.script_prefix, "AL");
        assert_eq!(character.content_prefix, "\"A: \"");
    }

    #[test]
    fn update_rejects_unknown_id_and_name_clash() {
        let mut roster = Roster::new();
        let alice_id = roster.add(alice()).expect("add");
        roster
            .add(CharacterDraft::new("Bob", "B", "b"))
            .expect("add bob");

        let clash = roster
            .update(alice_id, CharacterDraft::new("Bob", "A", "a"))
            .expect_err("rename onto bob should fail");
        assert_eq!(clash.code, "ROSTER_DUPLICATE_NAME");

        let missing = roster
            .update(CharacterId(9), alice())
            .expect_err("unknown id should fail");
        assert_eq!(missing.code, "ROSTER_UNKNOWN_CHARACTER");
    }

    #[test]
    fn script_config_deserialize_applies_defaults() {
        let config: ScriptConfig =
            serde_json::from_str(r#"{"name":"talk"}"#).expect("config should deserialize");
        assert_eq!(config, ScriptConfig::new("talk"));

        let explicit: ScriptConfig =
            serde_json::from_str(r#"{"name":"S","initialCounter":2,"initialSpan":10}"#)
                .expect("config should deserialize");
        assert_eq!(explicit.initial_counter, 2);
        assert_eq!(explicit.initial_span, 10);
    }

    #[test]
    fn character_draft_deserializes_camel_case() {
        let drafts: Vec<CharacterDraft> = serde_json::from_str(
            r#"[{"name":"Alice","scriptPrefix":"A","contentPrefix":"\"Alice: \""}]"#,
        )
        .expect("drafts should deserialize");
        assert_eq!(drafts[0].script_prefix, "A");
    }
}
