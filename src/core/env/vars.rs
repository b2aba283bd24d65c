use std::env;
use std::ffi::{NulError, OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use super::{SearchList, PATH_VAR};
use crate::process::CStringArray;

/// The inherited environment as an ordered list of `NAME=VALUE` entries.
///
/// Read-only after construction; it is handed to the resolver, the `env`
/// builtin and every child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    entries: Vec<OsString>,
}

impl Environment {
    pub fn from_process() -> Self {
        let entries = env::vars_os()
            .map(|(name, value)| {
                let mut entry = name;
                entry.push("=");
                entry.push(value);
                entry
            })
            .collect();
        Self { entries }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.iter().map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.entries.iter().find_map(|entry| {
            let bytes = entry.as_bytes();
            let rest = bytes.strip_prefix(name.as_bytes())?;
            rest.strip_prefix(b"=").map(OsStr::from_bytes)
        })
    }

    pub fn search_list(&self) -> SearchList {
        self.get(PATH_VAR)
            .map(SearchList::parse)
            .unwrap_or_default()
    }

    /// Writes one entry per line, in order.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.entries {
            out.write_all(entry.as_bytes())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    pub fn to_c_array(&self) -> Result<CStringArray, NulError> {
        CStringArray::from_os_strs(self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample() -> Environment {
        Environment::from_entries(["HOME=/home/test", "PATH=/opt/bin:/bin", "PATHX=nope"])
    }

    #[test]
    fn test_get() {
        let env = sample();
        assert_eq!(env.get("HOME"), Some(OsStr::new("/home/test")));
        assert_eq!(env.get("PATH"), Some(OsStr::new("/opt/bin:/bin")));
        assert_eq!(env.get("PAT"), None);
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_search_list_from_path() {
        let list = sample().search_list();
        let dirs: Vec<&Path> = list.iter().collect();
        assert_eq!(dirs, vec![Path::new("/opt/bin"), Path::new("/bin")]);
    }

    #[test]
    fn test_missing_path_gives_empty_list() {
        let env = Environment::from_entries(["HOME=/root"]);
        assert!(env.search_list().is_empty());
    }

    #[test]
    fn test_write_to_preserves_order() -> io::Result<()> {
        let mut out = Vec::new();
        sample().write_to(&mut out)?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "HOME=/home/test\nPATH=/opt/bin:/bin\nPATHX=nope\n"
        );
        Ok(())
    }

    #[test]
    fn test_from_process_has_entries() {
        let env = Environment::from_process();
        assert_eq!(env.len(), std::env::vars_os().count());
        assert!(env.entries().all(|e| e.as_bytes().contains(&b'=')));
    }
}
