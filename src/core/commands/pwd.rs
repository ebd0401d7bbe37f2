use super::{Command, CommandError};
use crate::core::context::CommandContext;
use std::env;

#[derive(Clone, Debug, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<i32, CommandError> {
        let cwd = env::current_dir()?;
        println!("{}", cwd.display());
        Ok(0)
    }
}
