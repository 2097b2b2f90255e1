use std::{fmt, io::BufRead};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::cli::output;
use crate::config::Config;
use crate::errors::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Where the shell reads its lines from.
pub trait LineSource {
    /// Shows `prompt` and blocks for one line, without its line terminator.
    /// `Ok(None)` means the input has ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Terminal input through `rustyline`, with in-memory history.
pub struct EditorSource {
    editor: Editor<(), DefaultHistory>,
}

impl EditorSource {
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let editor_config = rustyline::Config::builder()
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();
        let editor = Editor::with_config(editor_config)?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(&format!("{prompt} ")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Line-by-line input from any reader, used when stdin is not a terminal.
/// Prompts are printed on their own line.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        output::prompt(prompt);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let content_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(content_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_source_strips_line_endings_only() {
        let mut source = ScriptSource::new(Cursor::new("  1 \r\nFood\n\nlast"));
        assert_eq!(source.read_line(">").unwrap().as_deref(), Some("  1 "));
        assert_eq!(source.read_line(">").unwrap().as_deref(), Some("Food"));
        assert_eq!(source.read_line(">").unwrap().as_deref(), Some(""));
        assert_eq!(source.read_line(">").unwrap().as_deref(), Some("last"));
        assert_eq!(source.read_line(">").unwrap(), None);
    }
}
