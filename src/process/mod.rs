use std::ffi::NulError;
use std::fmt;
use std::io;
use std::path::Path;

pub mod argv;
pub mod executor;

pub use argv::{AllocationError, ArgumentVector, CStringArray};
pub use executor::{ChildHandle, ProcessExecutor};

use crate::core::env::Environment;

/// Runs one resolved command to completion.
pub trait Launcher {
    fn launch(
        &self,
        path: &Path,
        argv: &ArgumentVector,
        env: &Environment,
        line_number: usize,
    ) -> Result<ExitStatus, ProcessError>;
}

impl Launcher for ProcessExecutor {
    fn launch(
        &self,
        path: &Path,
        argv: &ArgumentVector,
        env: &Environment,
        line_number: usize,
    ) -> Result<ExitStatus, ProcessError> {
        self.execute(path, argv, env, line_number)
    }
}

#[derive(Debug)]
pub enum ProcessError {
    InvalidArgument(String),
    Spawn(io::Error),
    Wait(io::Error),
}

impl From<NulError> for ProcessError {
    fn from(e: NulError) -> Self {
        ProcessError::InvalidArgument(format!(
            "NUL byte at offset {}",
            e.nul_position()
        ))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ProcessError::Spawn(e) => write!(f, "cannot fork: {}", e),
            ProcessError::Wait(e) => write!(f, "cannot wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Status of the last completed command, 0 to 255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExitStatus(u8);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);
    pub const CANNOT_EXECUTE: ExitStatus = ExitStatus(126);
    pub const NOT_FOUND: ExitStatus = ExitStatus(127);

    pub const fn new(code: u8) -> Self {
        ExitStatus(code)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    pub const fn success(self) -> bool {
        self.0 == 0
    }

    /// Decodes a raw `waitpid` status. Death by signal `n` maps to `128 + n`.
    pub fn from_wait_status(raw: libc::c_int) -> Self {
        if libc::WIFEXITED(raw) {
            ExitStatus((libc::WEXITSTATUS(raw) & 0xff) as u8)
        } else if libc::WIFSIGNALED(raw) {
            ExitStatus((128 + libc::WTERMSIG(raw)).clamp(0, 255) as u8)
        } else {
            ExitStatus(255)
        }
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> Self {
        i32::from(status.0)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_normal_exit() {
        // exit code lives in the second byte of the wait status
        assert_eq!(ExitStatus::from_wait_status(0), ExitStatus::SUCCESS);
        assert_eq!(ExitStatus::from_wait_status(2 << 8), ExitStatus::new(2));
        assert_eq!(ExitStatus::from_wait_status(255 << 8).code(), 255);
    }

    #[test]
    fn test_decodes_signal() {
        assert_eq!(
            ExitStatus::from_wait_status(libc::SIGINT).code(),
            128 + libc::SIGINT as u8
        );
        assert_eq!(
            ExitStatus::from_wait_status(libc::SIGKILL).code(),
            128 + libc::SIGKILL as u8
        );
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            ProcessError::InvalidArgument("bad".to_string()),
            ProcessError::Spawn(io::Error::from_raw_os_error(libc::EAGAIN)),
            ProcessError::Wait(io::Error::from_raw_os_error(libc::ECHILD)),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
