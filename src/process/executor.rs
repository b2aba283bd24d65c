use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::{ArgumentVector, ExitStatus, ProcessError};
use crate::core::env::Environment;

/// A forked child that has not been waited for yet.
#[derive(Debug)]
#[must_use = "a spawned child must be waited for"]
pub struct ChildHandle {
    pid: libc::pid_t,
}

impl ChildHandle {
    pub fn pid(&self) -> libc::pid_t {
        self.pid
    }

    /// Blocks until the child terminates.
    pub fn wait(self) -> Result<ExitStatus, ProcessError> {
        let mut raw: libc::c_int = 0;
        loop {
            let rc = unsafe { libc::waitpid(self.pid, &mut raw, 0) };
            if rc == self.pid {
                return Ok(ExitStatus::from_wait_status(raw));
            }

            let err = io::Error::last_os_error();
            if err.kind() != io::ErrorKind::Interrupted {
                return Err(ProcessError::Wait(err));
            }
        }
    }
}

/// Diagnostic written by the child when `execve` fails. Rendered before the
/// fork so the child does not allocate.
struct ExecFailure {
    prefix: Vec<u8>,
}

impl ExecFailure {
    fn new(program_name: &str, line_number: usize, command: &str) -> Self {
        Self {
            prefix: format!("{}: {}: {}: ", program_name, line_number, command).into_bytes(),
        }
    }

    fn report_and_exit(&self, errno: Option<i32>) -> ! {
        let (message, status): (&[u8], ExitStatus) = match errno {
            Some(libc::ENOENT) => (b"not found\n", ExitStatus::NOT_FOUND),
            Some(libc::EACCES) => (b"Permission denied\n", ExitStatus::CANNOT_EXECUTE),
            _ => (b"cannot execute\n", ExitStatus::CANNOT_EXECUTE),
        };

        unsafe {
            libc::write(
                libc::STDERR_FILENO,
                self.prefix.as_ptr().cast(),
                self.prefix.len(),
            );
            libc::write(libc::STDERR_FILENO, message.as_ptr().cast(), message.len());
            libc::_exit(i32::from(status))
        }
    }
}

/// Runs resolved commands as child processes, one at a time.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    program_name: String,
    debug: bool,
}

impl ProcessExecutor {
    pub fn new(program_name: impl Into<String>, debug: bool) -> Self {
        Self {
            program_name: program_name.into(),
            debug,
        }
    }

    /// Forks and replaces the child's image with `path`.
    ///
    /// `argv` and `env` are passed through unchanged. Everything the child
    /// needs is prepared before the fork; after it the child only calls
    /// `execve`, `write` and `_exit`.
    pub fn spawn(
        &self,
        path: &Path,
        argv: &ArgumentVector,
        env: &Environment,
        line_number: usize,
    ) -> Result<ChildHandle, ProcessError> {
        let program = CString::new(path.as_os_str().as_bytes())?;
        let args = argv.to_c_array()?;
        let envp = env.to_c_array()?;
        let failure = ExecFailure::new(
            &self.program_name,
            line_number,
            argv.command().unwrap_or_default(),
        );

        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Spawn(io::Error::last_os_error())),
            0 => {
                unsafe {
                    libc::execve(program.as_ptr(), args.as_ptr(), envp.as_ptr());
                }
                failure.report_and_exit(io::Error::last_os_error().raw_os_error())
            }
            pid => {
                if self.debug {
                    eprintln!(
                        "{}: debug: spawned {} as pid {}",
                        self.program_name,
                        path.display(),
                        pid
                    );
                }
                Ok(ChildHandle { pid })
            }
        }
    }

    /// Spawns `path` and waits for it.
    pub fn execute(
        &self,
        path: &Path,
        argv: &ArgumentVector,
        env: &Environment,
        line_number: usize,
    ) -> Result<ExitStatus, ProcessError> {
        let child = self.spawn(path, argv, env, line_number)?;
        let pid = child.pid();
        let status = child.wait()?;

        if self.debug {
            eprintln!(
                "{}: debug: pid {} exited with status {}",
                self.program_name, pid, status
            );
        }
        Ok(status)
    }
}
