use crate::core::commands::CommandError;
use crate::core::env::EnvError;
use crate::core::tokenizer::TokenizeError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    HomeDirNotFound,
    CommandError(CommandError),
    ProcessError(ProcessError),
    EnvError(EnvError),
    TokenizeError(TokenizeError),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::CommandError(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<EnvError> for ShellError {
    fn from(err: EnvError) -> Self {
        ShellError::EnvError(err)
    }
}

impl From<TokenizeError> for ShellError {
    fn from(err: TokenizeError) -> Self {
        ShellError::TokenizeError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::HomeDirNotFound => write!(f, "Home directory not found"),
            ShellError::CommandError(e) => write!(f, "Command error: {}", e),
            ShellError::ProcessError(e) => write!(f, "Process error: {}", e),
            ShellError::EnvError(e) => write!(f, "Environment error: {}", e),
            ShellError::TokenizeError(e) => write!(f, "Tokenize error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
