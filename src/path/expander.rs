use crate::error::ShellError;
use std::path::PathBuf;

/// Expands `~` prefixes to the user's home directory. `~user` forms are
/// passed through untouched.
#[derive(Clone, Debug, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            None => Ok(PathBuf::from(path)),
            Some("") => dirs::home_dir().ok_or(ShellError::HomeDirNotFound),
            Some(rest) => match rest.strip_prefix('/') {
                Some(tail) => {
                    let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                    Ok(home.join(tail))
                }
                None => Ok(PathBuf::from(path)),
            },
        }
    }
}
