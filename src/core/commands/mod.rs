use std::collections::BTreeMap;
use std::io::Write;

mod env;
mod exit;

pub use env::EnvCommand;
pub use exit::ExitCommand;

use crate::core::env::Environment;
use crate::process::{ArgumentVector, ExitStatus};

#[derive(Debug)]
pub enum CommandError {
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the loop does after a builtin ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(ExitStatus),
}

/// Result of offering a command line to the builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled(Flow),
    NotBuiltin,
}

/// State a builtin may read, plus where it writes.
pub struct CommandContext<'a> {
    pub env: &'a Environment,
    pub last_status: ExitStatus,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(
        &self,
        argv: &ArgumentVector,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        argv: &ArgumentVector,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(argv, ctx),
            CommandType::Env(cmd) => cmd.execute(argv, ctx),
        }
    }
}

/// Commands run inside the shell process, without forking.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("env", CommandType::Env(EnvCommand::new()));
        Self { commands }
    }

    /// Runs `argv` if its command name is reserved.
    pub fn dispatch(
        &self,
        argv: &ArgumentVector,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Dispatch, CommandError> {
        let Some(cmd) = argv.command().and_then(|name| self.commands.get(name)) else {
            return Ok(Dispatch::NotBuiltin);
        };
        cmd.execute(argv, ctx).map(Dispatch::Handled)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
