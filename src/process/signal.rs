use crate::process::ProcessError;

use libc::{signal, sighandler_t, SIGINT};

pub extern "C" fn handle_sigint(_: i32) {
    // Parent stays quiet; the foreground child owns the interrupt.
}

/// Ignores SIGINT in the parent for the duration of a foreground child so
/// Ctrl-C reaches the child instead of killing the shell.
pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    unsafe {
        signal(SIGINT, handle_sigint as sighandler_t);
    }
    Ok(())
}
