use clap::{ArgAction, Args, Parser, Subcommand};
use dlg_core::{DEFAULT_INITIAL_COUNTER, DEFAULT_INITIAL_SPAN};

#[derive(Debug, Parser)]
#[command(name = "dlg")]
#[command(about = "Turns speaker-tagged dialogue into scoreboard-gated tellraw commands")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Print the parsed dialogue lines.
    Parse(ParseArgs),
    /// Print the generated command script.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub(crate) struct DialogueInputArgs {
    #[arg(
        long = "character",
        num_args = 3,
        value_names = ["NAME", "PREFIX", "CONTENT_PREFIX"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub(crate) characters: Vec<String>,
    /// Dialogue text; read from stdin when omitted.
    #[arg(long = "text")]
    pub(crate) text: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct ParseArgs {
    #[command(flatten)]
    pub(crate) input: DialogueInputArgs,
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) input: DialogueInputArgs,
    /// Scoreboard objective name.
    #[arg(long = "name")]
    pub(crate) name: String,
    #[arg(long = "initial-counter", default_value_t = DEFAULT_INITIAL_COUNTER, allow_negative_numbers = true)]
    pub(crate) initial_counter: i64,
    #[arg(long = "initial-span", default_value_t = DEFAULT_INITIAL_SPAN, allow_negative_numbers = true)]
    pub(crate) initial_span: i64,
    /// Print only the script; warnings go to stderr.
    #[arg(long = "raw")]
    pub(crate) raw: bool,
}
