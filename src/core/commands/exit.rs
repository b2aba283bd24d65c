use super::{Command, CommandContext, CommandError, Flow};
use crate::process::ArgumentVector;

/// `exit`: stops the loop with the status of the last command.
///
/// Extra arguments are ignored.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        _argv: &ArgumentVector,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        Ok(Flow::Exit(ctx.last_status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use crate::process::ExitStatus;

    fn exit_with(tokens: &[&str], last_status: ExitStatus) -> Flow {
        let env = Environment::default();
        let mut out = Vec::new();
        let mut ctx = CommandContext {
            env: &env,
            last_status,
            out: &mut out,
        };
        let argv = ArgumentVector::build(tokens).unwrap();
        ExitCommand::new().execute(&argv, &mut ctx).unwrap()
    }

    #[test]
    fn test_exit_without_prior_command() {
        assert_eq!(exit_with(&["exit"], ExitStatus::SUCCESS), Flow::Exit(ExitStatus::SUCCESS));
    }

    #[test]
    fn test_exit_carries_last_status() {
        assert_eq!(exit_with(&["exit"], ExitStatus::new(2)), Flow::Exit(ExitStatus::new(2)));
    }

    #[test]
    fn test_exit_ignores_arguments() {
        assert_eq!(
            exit_with(&["exit", "42"], ExitStatus::new(2)),
            Flow::Exit(ExitStatus::new(2))
        );
    }
}
