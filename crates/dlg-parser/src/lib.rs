mod dialogue;

pub use dialogue::{parse_dialogue, word_count, SPAN_PER_WORD};
