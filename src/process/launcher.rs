use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{signal, ExitStatus, ProcessError};
use crate::core::context::CommandContext;

/// Spawns external commands and blocks until they finish. The child gets
/// the argument vector and a materialized environment snapshot; it never
/// sees the live store.
#[derive(Clone, Debug, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with the context's arguments and the given
    /// environment, waiting for termination. A spawn failure kills only
    /// this attempt; the caller maps it to status 127 and carries on.
    pub fn launch(
        &self,
        program: &Path,
        ctx: &CommandContext,
        env: &[(String, String)],
    ) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(program);
        command
            .args(ctx.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let mut child = command.spawn().map_err(|e| {
            ProcessError::LaunchFailed(program.display().to_string(), e.to_string())
        })?;

        signal::setup_signal_handlers()?;

        let status = child
            .wait()
            .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;

        match status.code() {
            Some(code) => Ok(ExitStatus::Code(code)),
            None => match status.signal() {
                Some(sig) => Ok(ExitStatus::Signaled(sig)),
                None => Err(ProcessError::WaitFailed(format!(
                    "child finished without code or signal: {}",
                    status
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_context(script: &str) -> CommandContext {
        CommandContext::new(vec![
            "sh".to_string(),
            "-c".to_string(),
            script.to_string(),
        ])
        .expect("non-empty argv")
    }

    fn base_env() -> Vec<(String, String)> {
        vec![("PATH".to_string(), "/usr/bin:/bin".to_string())]
    }

    #[test]
    fn test_exit_code_surfaces() -> Result<(), ProcessError> {
        let launcher = ProcessLauncher::new();
        let status = launcher.launch(Path::new("/bin/sh"), &sh_context("exit 3"), &base_env())?;
        assert_eq!(status, ExitStatus::Code(3));
        Ok(())
    }

    #[test]
    fn test_success_status() -> Result<(), ProcessError> {
        let launcher = ProcessLauncher::new();
        let status = launcher.launch(Path::new("/bin/sh"), &sh_context("exit 0"), &base_env())?;
        assert!(status.is_success());
        Ok(())
    }

    #[test]
    fn test_signal_termination_is_distinct() -> Result<(), ProcessError> {
        let launcher = ProcessLauncher::new();
        let status = launcher.launch(
            Path::new("/bin/sh"),
            &sh_context("kill -TERM $$"),
            &base_env(),
        )?;
        assert_eq!(status, ExitStatus::Signaled(libc::SIGTERM));
        Ok(())
    }

    #[test]
    fn test_child_sees_snapshot_env() -> Result<(), ProcessError> {
        let mut env = base_env();
        env.push(("HUSK_LAUNCH_TEST".to_string(), "42".to_string()));

        let launcher = ProcessLauncher::new();
        let status = launcher.launch(
            Path::new("/bin/sh"),
            &sh_context("test \"$HUSK_LAUNCH_TEST\" = 42"),
            &env,
        )?;
        assert!(status.is_success());
        Ok(())
    }

    #[test]
    fn test_launch_failure_does_not_panic() {
        let launcher = ProcessLauncher::new();
        let result = launcher.launch(
            Path::new("/no/such/binary"),
            &sh_context("exit 0"),
            &base_env(),
        );
        assert!(matches!(result, Err(ProcessError::LaunchFailed(_, _))));
    }
}
