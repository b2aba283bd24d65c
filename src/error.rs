use crate::core::commands::CommandError;
use crate::core::config::ConfigError;
use crate::process::{AllocationError, ProcessError};

/// Exit status used when the shell itself fails to allocate.
pub const ALLOCATION_FAILURE_STATUS: i32 = 1;
/// Exit status for unusable command-line flags.
pub const USAGE_STATUS: i32 = 2;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Allocation(AllocationError),
    ProcessError(ProcessError),
    CommandError(CommandError),
    ConfigError(ConfigError),
    FlagError(String),
    CtrlC(String),
}

impl ShellError {
    /// Status the whole shell exits with when this error is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::Allocation(_) => ALLOCATION_FAILURE_STATUS,
            ShellError::FlagError(_) | ShellError::ConfigError(_) => USAGE_STATUS,
            _ => 1,
        }
    }
}

impl ShellError {
    /// Whether the error came from the command line, so usage should follow it.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ShellError::FlagError(_) | ShellError::ConfigError(_))
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<AllocationError> for ShellError {
    fn from(err: AllocationError) -> Self {
        ShellError::Allocation(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::CommandError(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Allocation(e) => write!(f, "Allocation failure: {}", e),
            ShellError::ProcessError(e) => write!(f, "Process error: {}", e),
            ShellError::CommandError(e) => write!(f, "Command error: {}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
