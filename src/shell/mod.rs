use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rustyline::{config::Configurer, history::FileHistory, Editor};

use crate::core::commands::lock_env;
use crate::core::context::CommandContext;
use crate::core::env::EnvStore;
use crate::core::router::CommandRouter;
use crate::core::tokenizer;
use crate::error::ShellError;
use crate::flags::Flags;
use crate::input::ShellCompleter;
use crate::process::ExitStatus;

const DEFAULT_PROMPT: &str = "$ ";
const RC_FILE: &str = ".huskrc";
const HISTORY_FILE: &str = ".husk_history";

/// The interactive session: a rustyline editor in front of the
/// tokenize → route → record cycle. The environment store lives here for
/// the whole session; argument vectors live for one cycle.
pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    env: Arc<Mutex<EnvStore>>,
    router: CommandRouter,
    flags: Flags,
    last_status: ExitStatus,
    history_path: PathBuf,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let mut store = EnvStore::from_process_env();
        if store.get("PROMPT").is_none() {
            store.set("PROMPT", DEFAULT_PROMPT)?;
        }
        let env = Arc::new(Mutex::new(store));
        let router = CommandRouter::new(env.clone(), &flags);

        let mut completer = ShellCompleter::new();
        {
            let guard = lock_env(&env)?;
            completer.refresh_commands(guard.get("PATH"));
        }

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        let history_path = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(HISTORY_FILE);
        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                if !flags.is_set("quiet") {
                    eprintln!("Warning: couldn't load history: {}", e);
                }
            }
        }

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        let mut shell = Shell {
            editor,
            env,
            router,
            flags,
            last_status: ExitStatus::SUCCESS,
            history_path,
        };

        if !shell.flags.is_set("norc") {
            shell.load_rc()?;
        }

        Ok(shell)
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt()?;
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.execute_line(&line) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("husk: {}", e);
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    if !self.flags.is_set("quiet") {
                        println!("CTRL-D");
                    }
                    break;
                }
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            if !self.flags.is_set("quiet") {
                eprintln!("Warning: couldn't save history: {}", e);
            }
        }
        Ok(())
    }

    pub fn last_status(&self) -> ExitStatus {
        self.last_status
    }

    fn prompt(&self) -> Result<String, ShellError> {
        let env = lock_env(&self.env)?;
        Ok(env.get("PROMPT").unwrap_or(DEFAULT_PROMPT).to_string())
    }

    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        match run_cycle(&self.env, &self.router, line) {
            Ok(Some(status)) => {
                self.last_status = status;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                self.last_status = ExitStatus::Code(1);
                Err(e)
            }
        }
    }

    /// Runs `~/.huskrc` through the ordinary execution cycle, one line at
    /// a time. A broken rc line is reported and skipped, never fatal.
    fn load_rc(&mut self) -> Result<(), ShellError> {
        let Some(home) = dirs::home_dir() else {
            return Ok(());
        };
        let rc_path = home.join(RC_FILE);
        if !rc_path.exists() {
            return Ok(());
        }

        let contents = std::fs::read_to_string(&rc_path)?;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Err(e) = self.execute_line(line) {
                if !self.flags.is_set("quiet") {
                    eprintln!("husk: {}: {}", rc_path.display(), e);
                }
            }
        }
        Ok(())
    }
}

/// One full cycle: tokenize, route, publish the status as `?`. Returns
/// `None` for a no-op line (empty, or every token dropped). A tokenizer
/// rejection publishes status 1 before surfacing the error.
fn run_cycle(
    env: &Mutex<EnvStore>,
    router: &CommandRouter,
    line: &str,
) -> Result<Option<ExitStatus>, ShellError> {
    let argv = {
        let guard = lock_env(env)?;
        tokenizer::tokenize(line, &guard)
    };
    let argv = match argv {
        Ok(argv) => argv,
        Err(e) => {
            publish_status(env, ExitStatus::Code(1))?;
            return Err(e.into());
        }
    };

    let Some(ctx) = CommandContext::new(argv) else {
        return Ok(None);
    };

    let status = router.route(&ctx);
    publish_status(env, status)?;
    Ok(Some(status))
}

/// Publishes the numeric form of the last status under `?` so `echo $?`
/// works through ordinary substitution.
fn publish_status(env: &Mutex<EnvStore>, status: ExitStatus) -> Result<(), ShellError> {
    let mut guard = lock_env(env)?;
    guard.set("?", &status.as_code().to_string())?;
    Ok(())
}
