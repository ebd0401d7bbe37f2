use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Filesystem completion for argument positions.
#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_input(incomplete);

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir) {
            for entry in entries.filter_map(Result::ok) {
                let Some(name) = entry.file_name().to_str().map(String::from) else {
                    continue;
                };
                if !name.starts_with(&prefix) {
                    continue;
                }

                let mut replacement = join_display(&dir, &name);
                if entry.path().is_dir() {
                    replacement.push('/');
                }
                matches.push(Pair {
                    display: replacement.clone(),
                    replacement,
                });
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

fn split_input(incomplete: &str) -> (PathBuf, String) {
    if incomplete.is_empty() {
        return (PathBuf::from("."), String::new());
    }
    if incomplete.ends_with('/') {
        return (PathBuf::from(incomplete), String::new());
    }

    match incomplete.rsplit_once('/') {
        Some(("", name)) => (PathBuf::from("/"), name.to_string()),
        Some((parent, name)) => (PathBuf::from(parent), name.to_string()),
        None => (PathBuf::from("."), incomplete.to_string()),
    }
}

fn join_display(dir: &Path, name: &str) -> String {
    if dir == Path::new(".") {
        name.to_string()
    } else {
        let joined = dir.join(name);
        joined.to_string_lossy().into_owned()
    }
}
