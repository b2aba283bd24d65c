mod resolver;

pub use resolver::{is_executable, resolve, ResolvedCommand};
