use std::ffi::OsString;
use std::io;

use clap::Parser;
use dlg_api::{check_roster, parse_and_generate, DialogueSession};
use dlg_core::{DialogueScriptError, ScriptConfig};

mod cli_args;
mod error_map;
mod models;
mod report;
mod roster_args;

pub(crate) use cli_args::{Cli, DialogueInputArgs, GenerateArgs, Mode, ParseArgs};
pub(crate) use error_map::{emit_error, map_cli_stdin_read};
pub(crate) use models::LineReport;
pub(crate) use report::{emit_lines, render_generate_report, render_parse_report, warning_line};
pub(crate) use roster_args::roster_from_args;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, DialogueScriptError> {
    match cli.command {
        Mode::Parse(args) => run_parse(args),
        Mode::Generate(args) => run_generate(args),
    }
}

fn run_parse(args: ParseArgs) -> Result<i32, DialogueScriptError> {
    let (mut session, text) = load_input(args.input)?;
    let mut diagnostics = check_roster(session.roster());
    diagnostics.extend(session.load_dialogue(&text));

    emit_lines(render_parse_report(
        session.roster(),
        session.dialogues(),
        &diagnostics,
    ));
    Ok(0)
}

fn run_generate(args: GenerateArgs) -> Result<i32, DialogueScriptError> {
    let (session, text) = load_input(args.input)?;
    let config = ScriptConfig {
        name: args.name,
        initial_counter: args.initial_counter,
        initial_span: args.initial_span,
    };
    let result = parse_and_generate(&text, session.roster(), &config)?;

    if args.raw {
        for diagnostic in &result.diagnostics {
            eprintln!("{}", warning_line(diagnostic));
        }
        print!("{}", result.script);
    } else {
        emit_lines(render_generate_report(&result.script, &result.diagnostics));
    }
    Ok(0)
}

fn load_input(
    input: DialogueInputArgs,
) -> Result<(DialogueSession, String), DialogueScriptError> {
    let roster = roster_from_args(&input.characters)?;
    let text = match input.text {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).map_err(map_cli_stdin_read)?,
    };
    Ok((DialogueSession::with_roster(roster), text))
}
