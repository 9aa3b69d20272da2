use dlg_core::DialogueScriptError;
use std::fmt::Display;

fn map_error(code: &'static str, error: impl Display) -> DialogueScriptError {
    DialogueScriptError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: DialogueScriptError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).expect("string json")
    );
    1
}

pub(crate) fn map_cli_stdin_read(error: std::io::Error) -> DialogueScriptError {
    map_error("CLI_STDIN_READ", error)
}
