use std::collections::BTreeSet;
use std::fs;

use rustyline::completion::Pair;

use crate::core::commands::Builtins;
use crate::core::env::SearchList;
use crate::path::is_executable;

/// Completes the command word from builtins and search-list executables.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(builtins: &Builtins, search_list: &SearchList) -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
        };
        completer.refresh_commands(builtins, search_list);
        completer
    }

    pub fn refresh_commands(&mut self, builtins: &Builtins, search_list: &SearchList) {
        self.commands.clear();
        self.commands.extend(builtins.names().map(String::from));
        self.add_path_commands(search_list);
    }

    fn add_path_commands(&mut self, search_list: &SearchList) {
        for dir in search_list.iter() {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                if !is_executable(&entry.path()) {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .range(prefix.to_string()..)
            .take_while(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}
