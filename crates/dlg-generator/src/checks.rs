use std::collections::BTreeMap;
use std::sync::OnceLock;

use dlg_core::{Diagnostic, DiagnosticKind, Roster, ScriptConfig};
use regex::Regex;

/// Reports characters that can never be reached by speaker tag because an
/// earlier character already claims the same prefix.
pub fn check_roster(roster: &Roster) -> Vec<Diagnostic> {
    let mut first_owner = BTreeMap::<String, &str>::new();
    let mut diagnostics = Vec::new();

    for character in roster.iter() {
        let key = character.script_prefix.to_lowercase();
        if let Some(owner) = first_owner.get(&key).copied() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::DuplicateScriptPrefix,
                format!(
                    "\"{}\" shares script prefix \"{}\" with \"{}\"; lines resolve to \"{}\".",
                    character.name, character.script_prefix, owner, owner
                ),
            ));
        } else {
            first_owner.insert(key, character.name.as_str());
        }
    }

    diagnostics
}

pub fn check_config(config: &ScriptConfig) -> Vec<Diagnostic> {
    if objective_regex().is_match(&config.name) {
        return Vec::new();
    }
    vec![Diagnostic::new(
        DiagnosticKind::InvalidObjectiveName,
        format!(
            "Objective name \"{}\" must be non-empty and use only letters, digits, '_', '.', '+' or '-'.",
            config.name
        ),
    )]
}

fn objective_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.+\-]+$").expect("objective regex"))
}

#[cfg(test)]
mod checks_tests {
    use super::*;
    use dlg_core::CharacterDraft;

    #[test]
    fn check_roster_flags_case_insensitive_prefix_repeats() {
        let roster = Roster::from_drafts([
            CharacterDraft::new("Alice", "A", "x"),
            CharacterDraft::new("Bob", "B", "y"),
            CharacterDraft::new("Ann", "a", "z"),
        ])
        .expect("roster");
        let diagnostics = check_roster(&roster);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateScriptPrefix);
        assert!(diagnostics[0].message.contains("Ann"));
        assert!(diagnostics[0].message.contains("Alice"));
    }

    #[test]
    fn check_roster_accepts_distinct_prefixes() {
        let roster = Roster::from_drafts([
            CharacterDraft::new("Alice", "A", "x"),
            CharacterDraft::new("Bob", "B", "y"),
        ])
        .expect("roster");
        assert!(check_roster(&roster).is_empty());
    }

    #[test]
    fn check_config_validates_objective_name() {
        assert!(check_config(&ScriptConfig::new("talk_1.a+b-c")).is_empty());

        for bad in ["", "has space", "quote\""] {
            let diagnostics = check_config(&ScriptConfig::new(bad));
            assert_eq!(diagnostics.len(), 1, "expected a finding for {:?}", bad);
            assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidObjectiveName);
        }
    }
}
