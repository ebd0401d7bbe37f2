/// One execution request: the argument vector for a single input line.
/// `argv` is non-empty by construction, so the router never has to check
/// for an empty command. Dropped at the end of the cycle, before the next
/// line is read.
#[derive(Clone, Debug)]
pub struct CommandContext {
    argv: Vec<String>,
}

impl CommandContext {
    /// Returns `None` for an empty vector; empty input short-circuits to a
    /// no-op cycle before routing.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}
