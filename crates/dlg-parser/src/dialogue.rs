use std::sync::OnceLock;

use dlg_core::{Diagnostic, DiagnosticKind, DialogueLine, ParseResult, Roster};
use regex::Regex;

/// Span units granted per alphabetic word of a speaker line.
pub const SPAN_PER_WORD: u32 = 4;

/// Splits `raw_text` into dialogue lines, resolving each `Tag: text` line
/// against `roster`. Lines that follow a speaker line are folded into it.
pub fn parse_dialogue(raw_text: &str, roster: &Roster) -> ParseResult {
    let mut result = ParseResult::default();

    for (index, raw_line) in raw_text.lines().enumerate() {
        let line_no = index + 1;
        let leading_trimmed = raw_line.trim_start();

        if let Some(caps) = speaker_line_regex().captures(leading_trimmed) {
            let speaker_tag = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2).map_or("", |m| m.as_str()).trim_end();

            let Some(character) = roster.resolve_prefix(speaker_tag) else {
                result.diagnostics.push(Diagnostic::at_line(
                    DiagnosticKind::UnresolvedSpeaker,
                    line_no,
                    format!("No character uses script prefix \"{}\".", speaker_tag),
                ));
                continue;
            };

            result.lines.push(DialogueLine {
                speaker: character.id,
                span: span_for_line(raw_line.trim()),
                content: content.to_string(),
            });
            continue;
        }

        match result.lines.last_mut() {
            Some(previous) => {
                previous.content.push('\n');
                previous.content.push_str(raw_line);
            }
            None => result.diagnostics.push(Diagnostic::at_line(
                DiagnosticKind::OrphanContinuationLine,
                line_no,
                "Line appears before any recognized speaker line.",
            )),
        }
    }

    result
}

/// Counts maximal runs of ASCII letters.
pub fn word_count(text: &str) -> usize {
    word_regex().find_iter(text).count()
}

// The speaker tag is part of the counted line.
fn span_for_line(trimmed_line: &str) -> u32 {
    let words = u32::try_from(word_count(trimmed_line)).unwrap_or(u32::MAX);
    words.saturating_mul(SPAN_PER_WORD)
}

fn speaker_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Za-z]+): (.*)$").expect("speaker line regex"))
}

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[A-Za-z]+").expect("word regex"))
}
