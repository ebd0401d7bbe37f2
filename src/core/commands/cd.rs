use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{lock_env, Command, CommandError};
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;
use crate::path::PathExpander;

/// `cd [dir]` — bare `cd` targets `HOME` from the store; `~` prefixes
/// expand to the home directory.
#[derive(Clone)]
pub struct CdCommand {
    env: Arc<Mutex<EnvStore>>,
    expander: PathExpander,
}

impl CdCommand {
    pub fn new(env: Arc<Mutex<EnvStore>>) -> Self {
        Self {
            env,
            expander: PathExpander::new(),
        }
    }

    fn target(&self, ctx: &CommandContext) -> Result<PathBuf, CommandError> {
        match ctx.args().first() {
            Some(path) => self
                .expander
                .expand(path)
                .map_err(|e| CommandError::ExecutionError(e.to_string())),
            None => {
                let env = lock_env(&self.env)?;
                env.get("HOME").map(PathBuf::from).ok_or_else(|| {
                    CommandError::InvalidArguments("cd: HOME not set".to_string())
                })
            }
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        let target = self.target(ctx)?;
        env::set_current_dir(&target).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", target.display(), e))
        })?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(home: Option<&str>) -> CdCommand {
        let mut store = EnvStore::new();
        if let Some(home) = home {
            store.set("HOME", home).expect("set HOME");
        }
        CdCommand::new(Arc::new(Mutex::new(store)))
    }

    fn ctx(argv: &[&str]) -> CommandContext {
        CommandContext::new(argv.iter().map(|s| s.to_string()).collect())
            .expect("non-empty argv")
    }

    #[test]
    fn test_cd_explicit_path() -> Result<(), CommandError> {
        let cmd = setup(None);
        let temp_dir = env::temp_dir();
        assert_eq!(
            cmd.execute(&ctx(&["cd", &temp_dir.to_string_lossy()]))?,
            0
        );
        assert_eq!(
            env::current_dir()?.canonicalize()?,
            temp_dir.canonicalize()?
        );
        Ok(())
    }

    #[test]
    fn test_bare_cd_uses_store_home() -> Result<(), CommandError> {
        let temp_dir = env::temp_dir();
        let cmd = setup(Some(&temp_dir.to_string_lossy()));
        assert_eq!(cmd.execute(&ctx(&["cd"]))?, 0);
        assert_eq!(
            env::current_dir()?.canonicalize()?,
            temp_dir.canonicalize()?
        );
        Ok(())
    }

    #[test]
    fn test_bare_cd_without_home_fails() {
        let cmd = setup(None);
        let result = cmd.execute(&ctx(&["cd"]));
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }

    #[test]
    fn test_cd_invalid_path_fails() {
        let cmd = setup(None);
        let result = cmd.execute(&ctx(&["cd", "/path/that/does/not/exist"]));
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }
}
