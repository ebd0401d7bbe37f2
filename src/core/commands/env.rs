use std::sync::{Arc, Mutex};

use super::{lock_env, Command, CommandError};
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;

/// `env` — prints one `KEY=VALUE` line per store entry, in insertion
/// order.
#[derive(Clone)]
pub struct EnvCommand {
    env: Arc<Mutex<EnvStore>>,
}

impl EnvCommand {
    pub fn new(env: Arc<Mutex<EnvStore>>) -> Self {
        Self { env }
    }
}

impl Command for EnvCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<i32, CommandError> {
        let env = lock_env(&self.env)?;
        for (key, value) in env.iter() {
            println!("{}={}", key, value);
        }
        Ok(0)
    }
}
