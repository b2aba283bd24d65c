use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::core::env::SearchList;

/// Where a command name points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCommand {
    /// The name itself is a path to a file.
    Direct(PathBuf),
    /// Located in a search-list directory.
    Found(PathBuf),
    NotFound,
}

impl ResolvedCommand {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedCommand::Direct(path) | ResolvedCommand::Found(path) => Some(path),
            ResolvedCommand::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, ResolvedCommand::NotFound)
    }
}

/// Resolves `command` to an executable path.
///
/// A name containing `/` is only checked in place and never searched for.
/// A bare name that exists relative to the working directory is also taken as
/// is. Anything else is looked up in `search_list`; the first directory
/// holding an executable file of that name wins.
pub fn resolve(command: &str, search_list: &SearchList) -> ResolvedCommand {
    if command.is_empty() {
        return ResolvedCommand::NotFound;
    }

    let direct = Path::new(command);
    if command.contains('/') {
        return if fs::metadata(direct).is_ok() {
            ResolvedCommand::Direct(direct.to_path_buf())
        } else {
            ResolvedCommand::NotFound
        };
    }

    if fs::metadata(direct).is_ok() {
        return ResolvedCommand::Direct(direct.to_path_buf());
    }

    search_list
        .iter()
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
        .map_or(ResolvedCommand::NotFound, ResolvedCommand::Found)
}

/// Regular file with at least one execute bit set.
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
