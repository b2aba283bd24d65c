mod command;
mod shell;

pub use shell::ShellHelper;
