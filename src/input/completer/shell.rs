use std::borrow::Cow;

use super::command::CommandCompleter;
use crate::core::commands::Builtins;
use crate::core::env::SearchList;
use crate::highlight::SyntaxHighlighter;
use crate::path::resolve;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Editor helper: command and file completion, command-word colouring.
pub struct ShellHelper {
    command_completer: CommandCompleter,
    file_completer: FilenameCompleter,
    highlighter: SyntaxHighlighter,
    builtins: Builtins,
    search_list: SearchList,
}

impl ShellHelper {
    pub fn new(builtins: Builtins, search_list: SearchList) -> Self {
        ShellHelper {
            command_completer: CommandCompleter::new(&builtins, &search_list),
            file_completer: FilenameCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
            builtins,
            search_list,
        }
    }

    fn is_known(&self, command: &str) -> bool {
        self.builtins.is_builtin(command) || resolve(command, &self.search_list).is_found()
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter
            .highlight_command(line, |command| self.is_known(command))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let word_start = word_start(before_cursor);

        if before_cursor[..word_start].trim().is_empty() {
            let prefix = &before_cursor[word_start..];
            Ok((word_start, self.command_completer.complete_command(prefix)))
        } else {
            self.file_completer.complete(line, pos, ctx)
        }
    }
}

/// Byte offset just past the last whitespace character, which may be wider
/// than one byte.
fn word_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}
