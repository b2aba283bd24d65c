use std::path::PathBuf;

const HISTORY_FILE_NAME: &str = ".simsh_history";

/// `$HOME/.simsh_history`, if a home directory is known.
pub fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_file_under_home() {
        if let Some(home) = dirs::home_dir() {
            let path = default_history_file().unwrap();
            assert!(path.starts_with(&home));
            assert!(path.ends_with(HISTORY_FILE_NAME));
        } else {
            assert!(default_history_file().is_none());
        }
    }
}
