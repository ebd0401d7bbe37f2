use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

mod cd;
mod echo;
mod env;
mod exit;
mod export;
mod pwd;
mod type_cmd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use export::ExportCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;

use crate::core::context::CommandContext;
use crate::core::env::{EnvError, EnvStore};

/// Every builtin the shell knows, in registry order.
pub const BUILTIN_NAMES: &[&str] = &["cd", "echo", "env", "exit", "export", "pwd", "type"];

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    EnvError(EnvError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::EnvError(err) => write!(f, "environment error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

/// The one contract every builtin conforms to: perform the effect for the
/// given context; report a status (0 success, nonzero failure).
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Echo(EchoCommand),
    Env(EnvCommand),
    Exit(ExitCommand),
    Export(ExportCommand),
    Pwd(PwdCommand),
    Type(TypeCommand),
}

impl Command for CommandType {
    fn execute(&self, ctx: &CommandContext) -> Result<i32, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(ctx),
            CommandType::Echo(cmd) => cmd.execute(ctx),
            CommandType::Env(cmd) => cmd.execute(ctx),
            CommandType::Exit(cmd) => cmd.execute(ctx),
            CommandType::Export(cmd) => cmd.execute(ctx),
            CommandType::Pwd(cmd) => cmd.execute(ctx),
            CommandType::Type(cmd) => cmd.execute(ctx),
        }
    }
}

/// Fixed name-to-handler table, populated once at startup. No dynamic
/// registration.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl BuiltinRegistry {
    pub fn new(env: Arc<Mutex<EnvStore>>) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert(
            "cd".to_string(),
            CommandType::Cd(CdCommand::new(env.clone())),
        );
        commands.insert("echo".to_string(), CommandType::Echo(EchoCommand::new()));
        commands.insert(
            "env".to_string(),
            CommandType::Env(EnvCommand::new(env.clone())),
        );
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "export".to_string(),
            CommandType::Export(ExportCommand::new(env.clone())),
        );
        commands.insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new()));
        commands.insert("type".to_string(), CommandType::Type(TypeCommand::new(env)));

        Self { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<&impl Command> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}

pub(crate) fn lock_env(env: &Mutex<EnvStore>) -> Result<std::sync::MutexGuard<'_, EnvStore>, CommandError> {
    env.lock()
        .map_err(|_| CommandError::ExecutionError("environment store lock poisoned".to_string()))
}
