use super::{Command, CommandContext, CommandError, Flow};
use crate::process::ArgumentVector;

/// `env`: prints the inherited environment, one entry per line.
#[derive(Clone)]
pub struct EnvCommand;

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(
        &self,
        _argv: &ArgumentVector,
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        ctx.env.write_to(ctx.out)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use crate::process::ExitStatus;

    #[test]
    fn test_env_prints_entries_in_order() -> Result<(), CommandError> {
        let env = Environment::from_entries(["ZED=last", "ALPHA=first", "PATH=/bin"]);
        let mut out = Vec::new();
        let mut ctx = CommandContext {
            env: &env,
            last_status: ExitStatus::SUCCESS,
            out: &mut out,
        };
        let argv = ArgumentVector::build(&["env"]).unwrap();

        let flow = EnvCommand::new().execute(&argv, &mut ctx)?;
        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ZED=last\nALPHA=first\nPATH=/bin\n"
        );
        Ok(())
    }

    #[test]
    fn test_env_empty_environment() -> Result<(), CommandError> {
        let env = Environment::default();
        let mut out = Vec::new();
        let mut ctx = CommandContext {
            env: &env,
            last_status: ExitStatus::new(5),
            out: &mut out,
        };
        let argv = ArgumentVector::build(&["env"]).unwrap();

        assert_eq!(EnvCommand::new().execute(&argv, &mut ctx)?, Flow::Continue);
        assert!(out.is_empty());
        Ok(())
    }
}
