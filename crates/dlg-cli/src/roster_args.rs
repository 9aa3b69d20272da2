use dlg_core::{CharacterDraft, DialogueScriptError, Roster};

/// Builds a roster from flattened `--character NAME PREFIX CONTENT_PREFIX`
/// triples, keeping argument order.
pub(crate) fn roster_from_args(values: &[String]) -> Result<Roster, DialogueScriptError> {
    let triples = values.chunks_exact(3);
    if !triples.remainder().is_empty() {
        return Err(DialogueScriptError::new(
            "CLI_ROSTER_ARGS",
            format!(
                "--character expects NAME PREFIX CONTENT_PREFIX, got {} trailing value(s).",
                triples.remainder().len()
            ),
        ));
    }

    Roster::from_drafts(
        triples.map(|triple| CharacterDraft::new(&triple[0], &triple[1], &triple[2])),
    )
}
