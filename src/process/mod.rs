use std::fmt;

pub mod launcher;
pub mod signal;

pub use launcher::ProcessLauncher;

/// How a command finished. Signal termination is kept distinct from the
/// 0-255 exit-code space; it only folds into `128 + signal` when published
/// as the `?` variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Code(i32),
    Signaled(i32),
}

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus::Code(0);

    /// 127 is the conventional status for unresolvable or unlaunchable
    /// commands.
    pub const NOT_FOUND: ExitStatus = ExitStatus::Code(127);

    pub fn is_success(&self) -> bool {
        matches!(self, ExitStatus::Code(0))
    }

    /// Numeric form used for the `?` variable.
    pub fn as_code(&self) -> i32 {
        match self {
            ExitStatus::Code(code) => *code,
            ExitStatus::Signaled(sig) => 128 + sig,
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exit code {}", code),
            ExitStatus::Signaled(sig) => write!(f, "terminated by signal {}", sig),
        }
    }
}

#[derive(Debug)]
pub enum ProcessError {
    LaunchFailed(String, String),
    WaitFailed(String),
    SignalError(String),
}

impl From<ctrlc::Error> for ProcessError {
    fn from(e: ctrlc::Error) -> Self {
        ProcessError::SignalError(e.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::LaunchFailed(program, msg) => {
                write!(f, "failed to launch {}: {}", program, msg)
            }
            ProcessError::WaitFailed(msg) => write!(f, "failed to wait for child: {}", msg),
            ProcessError::SignalError(msg) => write!(f, "signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
