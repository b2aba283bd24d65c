use std::io::BufRead;
use std::path::PathBuf;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

use super::ShellHelper;
use crate::core::config::Config;
use crate::error::ShellError;

/// Prompt shown before each line at a terminal.
pub const PROMPT: &str = "$ ";

/// Where the loop gets its lines from.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError>;
}

/// Lines from a pipe, a script or an in-memory buffer. Never prompts.
pub struct StreamSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for StreamSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let mut line = self.buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

/// Interactive lines through rustyline, with history and completion.
pub struct EditorSource {
    editor: Editor<ShellHelper, FileHistory>,
    history_file: Option<PathBuf>,
    quiet: bool,
}

impl EditorSource {
    pub fn new(config: &Config, helper: ShellHelper) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellHelper, FileHistory>::new()?;
        editor.set_helper(Some(helper));
        editor.set_auto_add_history(true);
        editor.set_max_history_size(config.history_size)?;

        let mut source = EditorSource {
            editor,
            history_file: config.history_file.clone(),
            quiet: config.quiet,
        };
        source.load_history();
        Ok(source)
    }

    fn load_history(&mut self) {
        let Some(path) = self.history_file.as_ref().filter(|p| p.exists()) else {
            return;
        };
        if let Err(e) = self.editor.load_history(path) {
            if !self.quiet {
                eprintln!("Warning: Couldn't load history: {}", e);
            }
        }
    }

    pub fn save_history(&mut self) {
        let Some(path) = self.history_file.as_ref() else {
            return;
        };
        if let Err(e) = self.editor.save_history(path) {
            if !self.quiet {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        match self.editor.readline(PROMPT) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the half-typed line
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for EditorSource {
    fn drop(&mut self) {
        self.save_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines(input: &[u8]) -> Vec<String> {
        let mut source = StreamSource::new(Cursor::new(input.to_vec()));
        let mut lines = Vec::new();
        while let Some(line) = source.read_line().unwrap() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_reads_lines_without_terminator() {
        assert_eq!(lines(b"ls -l\nenv\n"), vec!["ls -l", "env"]);
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(lines(b"env\nexit"), vec!["env", "exit"]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        assert_eq!(lines(b"a\r\n\n  \nb"), vec!["a", "", "  ", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(lines(b"").is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let read = lines(b"echo \xff\n");
        assert_eq!(read.len(), 1);
        assert!(read[0].starts_with("echo "));
    }
}
