use std::sync::{Arc, Mutex};

use crate::core::commands::{BuiltinRegistry, Command};
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;
use crate::flags::Flags;
use crate::path::PathResolver;
use crate::process::{ExitStatus, ProcessLauncher};

/// Orchestrates one request: builtins first, then `PATH` resolution and an
/// external launch, otherwise "not found". Failures stay local to the
/// cycle; only the `exit` builtin leaves the session.
pub struct CommandRouter {
    registry: BuiltinRegistry,
    resolver: PathResolver,
    launcher: ProcessLauncher,
    env: Arc<Mutex<EnvStore>>,
    quiet_mode: bool,
}

impl CommandRouter {
    pub fn new(env: Arc<Mutex<EnvStore>>, flags: &Flags) -> Self {
        Self {
            registry: BuiltinRegistry::new(env.clone()),
            resolver: PathResolver::new(),
            launcher: ProcessLauncher::new(),
            env,
            quiet_mode: flags.is_set("quiet"),
        }
    }

    pub fn route(&self, ctx: &CommandContext) -> ExitStatus {
        if let Some(builtin) = self.registry.lookup(ctx.name()) {
            return match builtin.execute(ctx) {
                Ok(code) => ExitStatus::Code(code),
                Err(e) => {
                    if !self.quiet_mode {
                        eprintln!("husk: {}", e);
                    }
                    ExitStatus::Code(1)
                }
            };
        }

        let (resolved, env_snapshot) = {
            let env = match self.env.lock() {
                Ok(env) => env,
                Err(_) => {
                    eprintln!("husk: environment store lock poisoned");
                    return ExitStatus::Code(1);
                }
            };
            (
                self.resolver.resolve(ctx.name(), env.get("PATH")),
                env.snapshot(),
            )
        };

        let Some(program) = resolved else {
            if !self.quiet_mode {
                eprintln!("{}: not found", ctx.name());
            }
            return ExitStatus::NOT_FOUND;
        };

        match self.launcher.launch(&program, ctx, &env_snapshot) {
            Ok(status) => {
                if let ExitStatus::Signaled(_) = status {
                    if !self.quiet_mode {
                        eprintln!("husk: {}", status);
                    }
                }
                status
            }
            Err(e) => {
                if !self.quiet_mode {
                    eprintln!("husk: {}", e);
                }
                ExitStatus::NOT_FOUND
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> CommandRouter {
        let mut store = EnvStore::new();
        store.set("PATH", "/usr/bin:/bin").expect("set PATH");
        CommandRouter::new(Arc::new(Mutex::new(store)), &Flags::default())
    }

    fn ctx(argv: &[&str]) -> CommandContext {
        CommandContext::new(argv.iter().map(|s| s.to_string()).collect())
            .expect("non-empty argv")
    }

    #[test]
    fn test_builtin_dispatched_first() {
        let router = setup();
        assert_eq!(router.route(&ctx(&["echo", "hi"])), ExitStatus::Code(0));
    }

    #[test]
    fn test_builtin_failure_is_status_one() {
        let router = setup();
        let status = router.route(&ctx(&["cd", "/path/that/does/not/exist"]));
        assert_eq!(status, ExitStatus::Code(1));
    }

    #[test]
    fn test_external_success_propagates() {
        let router = setup();
        assert_eq!(router.route(&ctx(&["true"])), ExitStatus::Code(0));
    }

    #[test]
    fn test_external_failure_propagates() {
        let router = setup();
        assert_eq!(router.route(&ctx(&["false"])), ExitStatus::Code(1));
    }

    #[test]
    fn test_external_exit_code_propagates() {
        let router = setup();
        let status = router.route(&ctx(&["sh", "-c", "exit 3"]));
        assert_eq!(status, ExitStatus::Code(3));
    }

    #[test]
    fn test_unknown_command_not_found() {
        let router = setup();
        let status = router.route(&ctx(&["definitely_not_a_command_husk"]));
        assert_eq!(status, ExitStatus::NOT_FOUND);
    }

    #[test]
    fn test_unset_path_means_not_found() {
        let router = CommandRouter::new(
            Arc::new(Mutex::new(EnvStore::new())),
            &Flags::default(),
        );
        assert_eq!(router.route(&ctx(&["true"])), ExitStatus::NOT_FOUND);
    }
}
