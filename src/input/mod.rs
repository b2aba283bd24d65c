mod completer;
pub mod source;
pub mod tokenizer;

pub use completer::ShellHelper;
pub use source::{EditorSource, LineSource, StreamSource, PROMPT};
pub use tokenizer::tokenize;
