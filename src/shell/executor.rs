use std::fmt::Display;
use std::io::Write;

use crate::core::commands::{CommandContext, Dispatch, Flow};
use crate::core::config::NotFoundPolicy;
use crate::error::ShellError;
use crate::input::tokenize;
use crate::path::{resolve, ResolvedCommand};
use crate::process::{ArgumentVector, ExitStatus, Launcher};

pub(crate) trait CommandHandler {
    /// Runs one input line. Only fatal errors are returned; everything else is
    /// reported on `err` and leaves the loop ready for the next line.
    fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError>;
}

impl<L: Launcher> CommandHandler for super::Shell<L> {
    fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError> {
        let line_number = self.state.next_line();
        let tokens = tokenize(line);
        // Owned for exactly this call; dropped on every return below.
        let argv = ArgumentVector::build(&tokens)?;
        let Some(command) = argv.command() else {
            return Ok(());
        };

        let dispatch = {
            let mut ctx = CommandContext {
                env: &self.env,
                last_status: self.state.status,
                out: &mut *out,
            };
            self.builtins.dispatch(&argv, &mut ctx)
        };

        match dispatch {
            Ok(Dispatch::Handled(Flow::Continue)) => return Ok(()),
            Ok(Dispatch::Handled(Flow::Exit(status))) => {
                self.state.terminate(status);
                return Ok(());
            }
            Ok(Dispatch::NotBuiltin) => {}
            Err(e) => {
                self.report(err, line_number, command, e);
                return Ok(());
            }
        }

        let resolved = resolve(command, &self.search_list);
        self.trace(err, format_args!("{}: resolved to {:?}", command, resolved));

        let path = match &resolved {
            ResolvedCommand::Direct(path) | ResolvedCommand::Found(path) => path,
            ResolvedCommand::NotFound => {
                self.report(err, line_number, command, "not found");
                match self.config.not_found {
                    NotFoundPolicy::Exit => self.state.terminate(ExitStatus::NOT_FOUND),
                    NotFoundPolicy::Continue => self.state.status = ExitStatus::NOT_FOUND,
                }
                return Ok(());
            }
        };

        // Anything buffered must reach the terminal before the child writes.
        let _ = out.flush();

        match self.launcher.launch(path, &argv, &self.env, line_number) {
            Ok(status) => self.state.status = status,
            Err(e) => self.report(err, line_number, command, e),
        }
        Ok(())
    }
}

impl<L: Launcher> super::Shell<L> {
    /// `<program>: <line>: <command>: <message>`
    fn report(&self, err: &mut dyn Write, line_number: usize, command: &str, message: impl Display) {
        let _ = writeln!(
            err,
            "{}: {}: {}: {}",
            self.config.program_name, line_number, command, message
        );
    }

    fn trace(&self, err: &mut dyn Write, message: std::fmt::Arguments<'_>) {
        if self.config.debug {
            let _ = writeln!(err, "{}: debug: {}", self.config.program_name, message);
        }
    }
}
