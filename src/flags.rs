use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress diagnostic output".to_string(),
                value: None,
            },
        );

        flags.insert(
            "norc".to_string(),
            Flag {
                short: "-n".to_string(),
                long: "--no-rc".to_string(),
                description: "Skip loading ~/.huskrc".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let mut matched = false;
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.value = Some("true".to_string());
                    matched = true;
                }
            }
            if !matched {
                return Err(ShellError::FlagError(format!("unknown flag: {}", arg)));
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("Usage: husk [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
