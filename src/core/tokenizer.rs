use super::env::EnvStore;

/// Upper bound on arguments per line, inherited from the original prompt
/// buffer sizing. Lines past the bound are rejected rather than silently
/// truncated.
pub const MAX_ARGS: usize = 50;

const VAR_SIGIL: char = '$';

#[derive(Debug)]
pub enum TokenizeError {
    TooManyArguments(usize),
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizeError::TooManyArguments(max) => {
                write!(f, "too many arguments (limit {})", max)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Splits a raw input line on whitespace, collapsing runs of delimiters.
/// A token starting with `$` is replaced by the named variable's value
/// from the store, or dropped entirely when the variable is unset. A bare
/// `$` names the empty variable, which is never set, so it drops too.
pub fn tokenize(line: &str, env: &EnvStore) -> Result<Vec<String>, TokenizeError> {
    let mut args = Vec::new();

    for word in line.split_whitespace() {
        let arg = match word.strip_prefix(VAR_SIGIL) {
            Some(name) => match env.get(name) {
                Some(value) => value.to_string(),
                None => continue,
            },
            None => word.to_string(),
        };

        if args.len() == MAX_ARGS {
            return Err(TokenizeError::TooManyArguments(MAX_ARGS));
        }
        args.push(arg);
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        let args = tokenize("echo hello world", &env)?;
        assert_eq!(args, ["echo", "hello", "world"]);
        Ok(())
    }

    #[test]
    fn test_empty_input_yields_no_tokens() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        assert!(tokenize("", &env)?.is_empty());
        assert!(tokenize("   \t  \n", &env)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_delimiter_runs_collapse() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        let args = tokenize("ls \t  -l\t\t/tmp", &env)?;
        assert_eq!(args, ["ls", "-l", "/tmp"]);
        Ok(())
    }

    #[test]
    fn test_set_variable_substitutes() -> Result<(), Box<dyn std::error::Error>> {
        let mut env = EnvStore::new();
        env.set("TARGET", "/usr/local")?;
        let args = tokenize("ls $TARGET", &env)?;
        assert_eq!(args, ["ls", "/usr/local"]);
        Ok(())
    }

    #[test]
    fn test_unset_variable_drops_token() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        let args = tokenize("echo $UNSET", &env)?;
        assert_eq!(args, ["echo"]);
        Ok(())
    }

    #[test]
    fn test_bare_sigil_drops() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        let args = tokenize("echo $", &env)?;
        assert_eq!(args, ["echo"]);
        Ok(())
    }

    #[test]
    fn test_substituted_value_is_single_token() -> Result<(), Box<dyn std::error::Error>> {
        let mut env = EnvStore::new();
        env.set("MSG", "two words")?;
        let args = tokenize("echo $MSG", &env)?;
        assert_eq!(args, ["echo", "two words"]);
        Ok(())
    }

    #[test]
    fn test_argument_bound_rejected() {
        let env = EnvStore::new();
        let line = "x ".repeat(MAX_ARGS + 1);
        let result = tokenize(&line, &env);
        assert!(matches!(result, Err(TokenizeError::TooManyArguments(_))));
    }

    #[test]
    fn test_exactly_at_bound_accepted() -> Result<(), TokenizeError> {
        let env = EnvStore::new();
        let line = "x ".repeat(MAX_ARGS);
        assert_eq!(tokenize(&line, &env)?.len(), MAX_ARGS);
        Ok(())
    }
}
