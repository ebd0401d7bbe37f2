use std::env;

use super::EnvError;

#[derive(Clone, Debug)]
struct EnvEntry {
    key: Box<str>,
    value: Box<str>,
}

/// Ordered variable store backing both shell-internal variables and the
/// environment handed to child processes. Entries keep their insertion
/// position across updates; setting an empty value removes the entry.
#[derive(Clone, Debug, Default)]
pub struct EnvStore {
    entries: Vec<EnvEntry>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from the calling process's environment, preserving
    /// the order the OS reports the variables in.
    pub fn from_process_env() -> Self {
        let mut store = Self::new();
        for (key, value) in env::vars() {
            if !key.is_empty() && !value.is_empty() {
                store.entries.push(EnvEntry {
                    key: key.into(),
                    value: value.into(),
                });
            }
        }
        store
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| &*e.key == name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &*e.key == name)
            .map(|e| &*e.value)
    }

    /// Inserts or updates a variable. An update keeps the entry where it
    /// already sits; an insert appends. An empty value behaves as `delete`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidName("empty variable name"));
        }

        if value.is_empty() {
            self.delete(name);
            return Ok(());
        }

        match self.position(name) {
            Some(idx) => self.entries[idx].value = value.into(),
            None => self.entries.push(EnvEntry {
                key: name.into(),
                value: value.into(),
            }),
        }
        Ok(())
    }

    /// Removes a variable; no-op when absent. Returns whether an entry
    /// was actually removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (&*e.key, &*e.value))
    }

    /// Materializes the `KEY=VALUE` environment passed to a child process.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.key.to_string(), e.value.to_string()))
            .collect()
    }
}
