mod store;

pub use store::EnvStore;

#[derive(Debug)]
pub enum EnvError {
    InvalidName(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(msg) => write!(f, "invalid variable name: {}", msg),
        }
    }
}

impl std::error::Error for EnvError {}
