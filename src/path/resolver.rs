use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Resolves a command name to an executable by scanning the directories of
/// a colon-delimited `PATH` value in order. Directories earlier in `PATH`
/// shadow later ones; the first match wins.
#[derive(Clone, Debug, Default)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first matching executable's path, or `None` when no
    /// directory contains one. A name containing `/` bypasses the search
    /// and is checked directly, as in POSIX shells.
    pub fn resolve(&self, command: &str, path_value: Option<&str>) -> Option<PathBuf> {
        if command.contains('/') {
            let candidate = PathBuf::from(command);
            return is_executable(&candidate).then_some(candidate);
        }

        let path_value = path_value?;
        path_value
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| Path::new(dir).join(command))
            .find(|candidate| is_executable(candidate))
    }
}

fn is_executable(path: &Path) -> bool {
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TestDirs {
        root: PathBuf,
    }

    impl TestDirs {
        fn new(tag: &str) -> Self {
            let root = std::env::temp_dir().join(format!("husk_resolver_{}_{}", tag, std::process::id()));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(root.join("a")).expect("create dir a");
            fs::create_dir_all(root.join("b")).expect("create dir b");
            Self { root }
        }

        fn write_executable(&self, dir: &str, name: &str) -> PathBuf {
            let path = self.root.join(dir).join(name);
            fs::write(&path, "#!/bin/sh\n").expect("write file");
            let mut perms = fs::metadata(&path).expect("metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("set permissions");
            path
        }

        fn path_value(&self) -> String {
            format!(
                "{}:{}",
                self.root.join("a").display(),
                self.root.join("b").display()
            )
        }
    }

    impl Drop for TestDirs {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_first_directory_wins() {
        let dirs = TestDirs::new("first");
        let expected = dirs.write_executable("a", "tool");
        dirs.write_executable("b", "tool");

        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve("tool", Some(&dirs.path_value())),
            Some(expected)
        );
    }

    #[test]
    fn test_later_directory_found_when_earlier_misses() {
        let dirs = TestDirs::new("later");
        let expected = dirs.write_executable("b", "only_in_b");

        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve("only_in_b", Some(&dirs.path_value())),
            Some(expected)
        );
    }

    #[test]
    fn test_non_executable_file_skipped() {
        let dirs = TestDirs::new("noexec");
        let plain = dirs.root.join("a").join("data");
        fs::write(&plain, "not a program").expect("write file");

        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve("data", Some(&dirs.path_value())), None);
    }

    #[test]
    fn test_unset_path_fails_immediately() {
        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve("ls", None), None);
    }

    #[test]
    fn test_missing_command_not_found() {
        let dirs = TestDirs::new("missing");
        let resolver = PathResolver::new();
        assert_eq!(
            resolver.resolve("no_such_command", Some(&dirs.path_value())),
            None
        );
    }

    #[test]
    fn test_slash_bypasses_search() {
        let dirs = TestDirs::new("direct");
        let direct = dirs.write_executable("a", "direct_tool");

        let resolver = PathResolver::new();
        let name = direct.to_string_lossy();
        assert_eq!(resolver.resolve(&name, None), Some(direct.clone()));
        assert_eq!(resolver.resolve("/no/such/binary", None), None);
    }

    #[test]
    fn test_empty_path_segments_ignored() {
        let dirs = TestDirs::new("segments");
        let expected = dirs.write_executable("a", "tool");
        let padded = format!(":{}::", dirs.root.join("a").display());

        let resolver = PathResolver::new();
        assert_eq!(resolver.resolve("tool", Some(&padded)), Some(expected));
    }
}
