use std::sync::{Arc, Mutex};

use super::{lock_env, Command, CommandError, BUILTIN_NAMES};
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;
use crate::path::PathResolver;

/// `type NAME...` — reports whether each name is a builtin, a `PATH`
/// executable, or unknown. Status 1 when any name is unresolved.
#[derive(Clone)]
pub struct TypeCommand {
    env: Arc<Mutex<EnvStore>>,
    resolver: PathResolver,
}

impl TypeCommand {
    pub fn new(env: Arc<Mutex<EnvStore>>) -> Self {
        Self {
            env,
            resolver: PathResolver::new(),
        }
    }
}

impl Command for TypeCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        let mut status = 0;

        for name in ctx.args() {
            if BUILTIN_NAMES.contains(&name.as_str()) {
                println!("{} is a shell builtin", name);
                continue;
            }

            let path_value = {
                let env = lock_env(&self.env)?;
                env.get("PATH").map(String::from)
            };

            match self.resolver.resolve(name, path_value.as_deref()) {
                Some(path) => println!("{} is {}", name, path.display()),
                None => {
                    eprintln!("{}: not found", name);
                    status = 1;
                }
            }
        }

        Ok(status)
    }
}
