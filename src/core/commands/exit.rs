use super::{Command, CommandError};
use crate::core::context::CommandContext;

/// `exit [code]` — the only path out of the session loop. Terminates the
/// whole process, never returning to the router.
#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }

    fn parse_code(args: &[String]) -> Result<i32, CommandError> {
        match args.first() {
            None => Ok(0),
            Some(arg) => arg.parse().map_err(|_| {
                CommandError::InvalidArguments(format!("exit: numeric argument required: {}", arg))
            }),
        }
    }
}

impl Command for ExitCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        let code = Self::parse_code(ctx.args())?;
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_defaults_to_zero() -> Result<(), CommandError> {
        assert_eq!(ExitCommand::parse_code(&[])?, 0);
        Ok(())
    }

    #[test]
    fn test_numeric_argument_parsed() -> Result<(), CommandError> {
        assert_eq!(ExitCommand::parse_code(&["42".to_string()])?, 42);
        Ok(())
    }

    #[test]
    fn test_non_numeric_argument_rejected() {
        let result = ExitCommand::parse_code(&["abc".to_string()]);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }
}
