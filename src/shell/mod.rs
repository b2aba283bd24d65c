use std::io::{self, Write};

mod executor;

use crate::{
    core::{commands::Builtins, config::Config, env::Environment, env::SearchList, state::ShellState},
    error::ShellError,
    input::{EditorSource, LineSource, ShellHelper, StreamSource},
    process::{ExitStatus, Launcher, ProcessExecutor},
};

use executor::CommandHandler;

/// The read, resolve, execute loop.
pub struct Shell<L = ProcessExecutor> {
    pub(crate) config: Config,
    pub(crate) env: Environment,
    pub(crate) search_list: SearchList,
    pub(crate) builtins: Builtins,
    pub(crate) launcher: L,
    pub(crate) state: ShellState,
}

impl Shell<ProcessExecutor> {
    pub fn new(config: Config, env: Environment) -> Self {
        let launcher = ProcessExecutor::new(config.program_name.clone(), config.debug);
        Shell::with_launcher(config, env, launcher)
    }
}

impl<L: Launcher> Shell<L> {
    pub fn with_launcher(config: Config, env: Environment, launcher: L) -> Self {
        let search_list = env.search_list();
        Shell {
            config,
            env,
            search_list,
            builtins: Builtins::new(),
            launcher,
            state: ShellState::new(),
        }
    }

    /// Reads and runs lines until `exit`, end of input, or a terminating
    /// not-found, and returns the status the shell should exit with.
    ///
    /// Errors are returned only when the shell cannot go on at all.
    pub fn run(
        &mut self,
        source: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<ExitStatus, ShellError> {
        while self.state.running {
            let line = match source.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                // a failed read ends the session like end of input
                Err(e) => {
                    if self.config.debug {
                        let _ = writeln!(err, "{}: debug: input: {}", self.config.program_name, e);
                    }
                    break;
                }
            };

            self.execute_line(&line, out, err)?;
        }

        self.state.running = false;
        Ok(self.state.status)
    }

    pub fn status(&self) -> ExitStatus {
        self.state.status
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    pub fn search_list(&self) -> &SearchList {
        &self.search_list
    }
}

/// Runs a session on the real standard streams.
pub fn run(config: Config) -> Result<ExitStatus, ShellError> {
    let mut shell = Shell::new(config, Environment::from_process());
    let mut out = io::stdout();
    let mut err = io::stderr();

    if shell.config().interactive {
        // The foreground child takes the interrupt; the shell stays up.
        ctrlc::set_handler(|| {})?;

        let helper = ShellHelper::new(shell.builtins().clone(), shell.search_list().clone());
        let mut source = EditorSource::new(shell.config(), helper)?;
        shell.run(&mut source, &mut out, &mut err)
    } else {
        let mut source = StreamSource::new(io::stdin().lock());
        shell.run(&mut source, &mut out, &mut err)
    }
}
