use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

mod paths;

pub use paths::default_history_file;

use crate::flags::Flags;

pub const DEFAULT_PROGRAM_NAME: &str = "simsh";
pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// What happens when a command name cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Stop the session with status 127. Default for scripts and pipes.
    Exit,
    /// Record status 127 and read the next line. Default at a terminal.
    Continue,
}

impl NotFoundPolicy {
    pub fn for_session(interactive: bool) -> Self {
        if interactive {
            NotFoundPolicy::Continue
        } else {
            NotFoundPolicy::Exit
        }
    }
}

impl FromStr for NotFoundPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exit" => Ok(NotFoundPolicy::Exit),
            "continue" => Ok(NotFoundPolicy::Continue),
            other => Err(ConfigError::InvalidValue {
                flag: "--not-found",
                value: other.to_string(),
            }),
        }
    }
}

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shell name used as the prefix of diagnostics.
    pub program_name: String,
    /// Whether standard input is a terminal.
    pub interactive: bool,
    pub not_found: NotFoundPolicy,
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub quiet: bool,
    pub debug: bool,
}

impl Config {
    /// Non-interactive defaults.
    pub fn new(program_name: impl Into<String>) -> Self {
        Config {
            program_name: program_name.into(),
            interactive: false,
            not_found: NotFoundPolicy::Exit,
            history_file: None,
            history_size: DEFAULT_HISTORY_SIZE,
            quiet: false,
            debug: false,
        }
    }

    pub fn from_flags(
        flags: &Flags,
        program_name: Option<String>,
        interactive: bool,
    ) -> Result<Self, ConfigError> {
        let program_name = program_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

        let not_found = match flags.get_value("not-found") {
            Some(value) => value.parse()?,
            None => NotFoundPolicy::for_session(interactive),
        };

        let history_file = if interactive {
            flags
                .get_value("history")
                .map(PathBuf::from)
                .or_else(default_history_file)
        } else {
            None
        };

        Ok(Config {
            program_name,
            interactive,
            not_found,
            history_file,
            history_size: DEFAULT_HISTORY_SIZE,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM_NAME)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "invalid value for {}: {}", flag, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
