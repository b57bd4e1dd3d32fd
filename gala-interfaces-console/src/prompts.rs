// Interactive prompts

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use crate::error::ConsoleError;

/// The one line editor shared by every prompt in the program. History
/// persists across runs in the configured history file.
pub struct Prompter {
    editor: DefaultEditor,
    history_file: PathBuf,
}

impl Prompter {
    pub fn new(history_file: &str) -> anyhow::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_file = PathBuf::from(history_file);
        if !history_file.as_os_str().is_empty() {
            // First run has no history yet.
            let _ = editor.load_history(&history_file);
        }
        Ok(Self {
            editor,
            history_file,
        })
    }

    pub fn save_history(&mut self) {
        if self.history_file.as_os_str().is_empty() {
            return;
        }
        if let Some(parent) = self.history_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = self.editor.save_history(&self.history_file) {
            warn!(
                "could not save history to {}: {}",
                self.history_file.display(),
                err
            );
        }
    }

    /// Reads one trimmed line. Ctrl-C and Ctrl-D cancel.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(ConsoleError::Cancelled),
            Err(err) => Err(err.into()),
        }
    }

    /// Like `read_line`, but untrimmed and never recorded in history.
    /// Used for passwords.
    pub fn read_secret(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(ConsoleError::Cancelled),
            Err(err) => Err(err.into()),
        }
    }

    /// Re-prompts until the reply is non-empty.
    pub fn read_nonempty(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
            println!("A value is required.");
        }
    }

    /// Reads a number, re-prompting on anything unparsable.
    pub fn read_u32(&mut self, prompt: &str) -> Result<u32, ConsoleError> {
        loop {
            let line = self.read_nonempty(prompt)?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Enter a number."),
            }
        }
    }

    /// Empty reply means "keep the current value".
    pub fn read_optional(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        let line = self.read_line(prompt)?;
        Ok((!line.is_empty()).then_some(line))
    }

    /// Defaults to no on an empty reply.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => println!("Answer y or n."),
            }
        }
    }

    /// Menu selection within `0..=max`.
    pub fn read_choice(&mut self, max: u32) -> Result<u32, ConsoleError> {
        loop {
            let value = self.read_u32("> ")?;
            if value <= max {
                return Ok(value);
            }
            println!("Pick an option between 0 and {}.", max);
        }
    }
}
