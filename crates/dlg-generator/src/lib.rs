mod checks;
mod script;
mod statements;

pub use checks::{check_config, check_roster};
pub use script::generate_script;
