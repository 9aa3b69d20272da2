use dlg_core::{Diagnostic, DialogueLine, Roster};

use crate::LineReport;

pub(crate) fn emit_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub(crate) fn warning_line(diagnostic: &Diagnostic) -> String {
    let line = diagnostic
        .line
        .map_or_else(|| "-".to_string(), |line| line.to_string());
    format!(
        "WARNING:{}|{}|{}",
        diagnostic.code(),
        line,
        serde_json::to_string(&diagnostic.message).expect("string json")
    )
}

pub(crate) fn render_parse_report(
    roster: &Roster,
    lines: &[DialogueLine],
    diagnostics: &[Diagnostic],
) -> Vec<String> {
    let mut out = vec!["RESULT:OK".to_string()];
    out.extend(diagnostics.iter().map(warning_line));

    for line in lines {
        let report = LineReport {
            speaker: roster
                .get(line.speaker)
                .map_or("", |character| character.name.as_str()),
            span: line.span,
            content: &line.content,
        };
        out.push(format!(
            "LINE_JSON:{}",
            serde_json::to_string(&report).expect("line json")
        ));
    }
    out
}

pub(crate) fn render_generate_report(script: &str, diagnostics: &[Diagnostic]) -> Vec<String> {
    let mut out = vec!["RESULT:OK".to_string()];
    out.extend(diagnostics.iter().map(warning_line));
    out.push(format!(
        "SCRIPT_JSON:{}",
        serde_json::to_string(script).expect("string json")
    ));
    out
}
