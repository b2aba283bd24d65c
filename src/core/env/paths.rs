use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Ordered directories searched for bare command names.
///
/// Empty segments of the source value are skipped; an empty list is valid
/// and makes every lookup fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchList {
    dirs: Vec<PathBuf>,
}

impl SearchList {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a colon-separated value such as `PATH`.
    pub fn parse(value: &OsStr) -> Self {
        let dirs = value
            .as_bytes()
            .split(|&b| b == b':')
            .filter(|part| !part.is_empty())
            .map(|part| PathBuf::from(OsStr::from_bytes(part)))
            .collect();
        Self { dirs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let list = SearchList::parse(OsStr::new("/usr/local/bin:/usr/bin:/bin"));
        let dirs: Vec<&Path> = list.iter().collect();
        assert_eq!(
            dirs,
            vec![
                Path::new("/usr/local/bin"),
                Path::new("/usr/bin"),
                Path::new("/bin")
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let list = SearchList::parse(OsStr::new(":/usr/bin::/bin:"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_empty_value() {
        assert!(SearchList::parse(OsStr::new("")).is_empty());
        assert!(SearchList::default().is_empty());
    }
}
