use std::{collections::BTreeSet, fs, path::Path};

use rustyline::completion::Pair;

use crate::core::commands::BUILTIN_NAMES;

/// Completes the first word of a line from the builtin table plus the
/// executables found in the store's `PATH` value.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_commands(&mut self, path_value: Option<&str>) {
        self.commands.clear();

        for name in BUILTIN_NAMES {
            self.commands.insert((*name).to_string());
        }

        let Some(path_value) = path_value else {
            return;
        };
        for dir in path_value.split(':').filter(|d| !d.is_empty()) {
            self.add_dir_entries(Path::new(dir));
        }
    }

    fn add_dir_entries(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.filter_map(Result::ok) {
            let is_file_like = entry
                .file_type()
                .map(|t| t.is_file() || t.is_symlink())
                .unwrap_or(false);
            if is_file_like {
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}
