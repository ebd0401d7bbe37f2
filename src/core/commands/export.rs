use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use super::{lock_env, Command, CommandError};
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;

/// `export NAME=VALUE` — writes the shell's variable store. An empty
/// value removes the variable, matching the store's delete-on-empty rule.
#[derive(Clone)]
pub struct ExportCommand {
    env: Arc<Mutex<EnvStore>>,
}

impl ExportCommand {
    pub fn new(env: Arc<Mutex<EnvStore>>) -> Self {
        Self { env }
    }

    fn parse_assignment(arg: &str) -> Result<(&str, Cow<'_, str>), CommandError> {
        let (name, value) = arg.split_once('=').ok_or_else(|| {
            CommandError::InvalidArguments("export syntax: export NAME=VALUE".to_string())
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::InvalidArguments(
                "variable name cannot be empty".to_string(),
            ));
        }

        let value = value.trim();
        let value = if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
            || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
        {
            Cow::Owned(value[1..value.len() - 1].to_owned())
        } else {
            Cow::Borrowed(value)
        };

        Ok((name, value))
    }
}

impl Command for ExportCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        if ctx.args().is_empty() {
            return Err(CommandError::InvalidArguments(
                "export syntax: export NAME=VALUE".to_string(),
            ));
        }

        let mut env = lock_env(&self.env)?;
        for arg in ctx.args() {
            let (name, value) = Self::parse_assignment(arg)?;
            env.set(name, &value)?;
        }
        Ok(0)
    }
}
