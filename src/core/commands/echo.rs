use super::{Command, CommandError};
use crate::core::context::CommandContext;

#[derive(Clone, Debug, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        println!("{}", ctx.args().join(" "));
        Ok(0)
    }
}
