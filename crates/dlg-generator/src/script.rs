use dlg_core::{DialogueLine, DialogueScriptError, Roster, ScriptConfig};

use crate::statements::{counter_increment, gated_tellraw, reset_after};

/// Renders the command script for `dialogues`. Each line fires when the
/// objective reaches the running threshold, which starts at
/// `initial_span` and advances by every line's span.
pub fn generate_script(
    config: &ScriptConfig,
    roster: &Roster,
    dialogues: &[DialogueLine],
) -> Result<String, DialogueScriptError> {
    let objective = config.name.as_str();
    let mut statements = Vec::with_capacity(dialogues.len() + 2);
    statements.push(counter_increment(objective, config.initial_counter));

    let mut threshold = config.initial_span;
    for (index, dialogue) in dialogues.iter().enumerate() {
        let Some(character) = roster.get(dialogue.speaker) else {
            return Err(DialogueScriptError::with_line(
                "GENERATE_UNKNOWN_CHARACTER",
                format!(
                    "Dialogue line {} refers to character id {} which is not in the roster.",
                    index + 1,
                    dialogue.speaker.0
                ),
                index + 1,
            ));
        };
        statements.push(gated_tellraw(
            objective,
            threshold,
            &character.content_prefix,
            &dialogue.content,
        ));
        threshold = threshold
            .checked_add(i64::from(dialogue.span))
            .ok_or_else(|| {
                DialogueScriptError::with_line(
                    "GENERATE_THRESHOLD_OVERFLOW",
                    format!(
                        "Threshold {} plus span {} of dialogue line {} does not fit in a 64-bit score.",
                        threshold,
                        dialogue.span,
                        index + 1
                    ),
                    index + 1,
                )
            })?;
    }

    statements.push(reset_after(objective, threshold));

    let mut script = String::new();
    for statement in statements {
        script.push_str(&statement);
        script.push('\n');
    }
    Ok(script)
}
