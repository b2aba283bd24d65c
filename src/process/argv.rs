use std::ffi::{CString, NulError, OsStr};
use std::fmt;
use std::os::raw::c_char;
use std::os::unix::ffi::OsStrExt;
use std::ptr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationError {
    pub requested: usize,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to allocate {} bytes for arguments", self.requested)
    }
}

impl std::error::Error for AllocationError {}

/// Owned arguments of one command line. Index 0 is the command name.
///
/// The vector owns every string; dropping it (or calling [`release`]) frees
/// them all, so a vector held by one loop iteration is gone on every path out
/// of that iteration.
///
/// [`release`]: ArgumentVector::release
#[derive(Debug, Default)]
pub struct ArgumentVector {
    args: Vec<String>,
}

impl ArgumentVector {
    /// Copies `tokens` into freshly allocated storage.
    ///
    /// Allocation is fallible here instead of aborting, so a shell that cannot
    /// hold its own arguments can report it and stop.
    pub fn build(tokens: &[&str]) -> Result<Self, AllocationError> {
        let mut args: Vec<String> = Vec::new();
        args.try_reserve_exact(tokens.len()).map_err(|_| AllocationError {
            requested: tokens.len().saturating_mul(std::mem::size_of::<String>()),
        })?;

        for token in tokens.iter().filter(|t| !t.is_empty()) {
            let mut arg = String::new();
            arg.try_reserve_exact(token.len())
                .map_err(|_| AllocationError {
                    requested: token.len(),
                })?;
            arg.push_str(token);
            args.push(arg);
        }

        Ok(Self { args })
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn command(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    /// Frees every owned string and the container, returning how many strings
    /// were released.
    pub fn release(self) -> usize {
        let released = self.args.len();
        drop(self);
        released
    }

    /// Null-terminated C view of the arguments, as `execve` expects it.
    pub fn to_c_array(&self) -> Result<CStringArray, NulError> {
        CStringArray::new(self.iter().map(str::as_bytes))
    }
}

/// A `NULL`-terminated array of C strings that owns its storage.
pub struct CStringArray {
    _strings: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CStringArray {
    pub fn new<'a, I>(items: I) -> Result<Self, NulError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let strings = items
            .into_iter()
            .map(CString::new)
            .collect::<Result<Vec<_>, _>>()?;
        let mut ptrs: Vec<*const c_char> = strings.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(ptr::null());

        Ok(Self {
            _strings: strings,
            ptrs,
        })
    }

    pub fn from_os_strs<'a, I>(items: I) -> Result<Self, NulError>
    where
        I: IntoIterator<Item = &'a OsStr>,
    {
        Self::new(items.into_iter().map(OsStr::as_bytes))
    }

    /// Number of strings, not counting the terminator.
    pub fn len(&self) -> usize {
        self.ptrs.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_reads_back_tokens() -> Result<(), AllocationError> {
        let tokens = ["ls", "-l", "/tmp"];
        let argv = ArgumentVector::build(&tokens)?;

        assert_eq!(argv.len(), 3);
        assert_eq!(argv.command(), Some("ls"));
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(argv.get(i), Some(*token));
        }
        assert_eq!(argv.get(3), None);
        Ok(())
    }

    #[test]
    fn test_release_counts_strings() -> Result<(), AllocationError> {
        let argv = ArgumentVector::build(&["echo", "a", "b", "c"])?;
        assert_eq!(argv.release(), 4);
        Ok(())
    }

    #[test]
    fn test_release_empty() -> Result<(), AllocationError> {
        let argv = ArgumentVector::build(&[])?;
        assert!(argv.is_empty());
        assert_eq!(argv.command(), None);
        assert_eq!(argv.release(), 0);
        Ok(())
    }

    #[test]
    fn test_skips_empty_tokens() -> Result<(), AllocationError> {
        let argv = ArgumentVector::build(&["a", "", "b"])?;
        assert_eq!(argv.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_c_array_is_null_terminated() {
        let argv = ArgumentVector::build(&["printf", "%s", "x"]).unwrap();
        let array = argv.to_c_array().unwrap();
        assert_eq!(array.len(), 3);

        let ptrs = unsafe { std::slice::from_raw_parts(array.as_ptr(), 4) };
        assert!(ptrs[3].is_null());
        let first = unsafe { CStr::from_ptr(ptrs[0]) };
        assert_eq!(first.to_str().unwrap(), "printf");
        let last = unsafe { CStr::from_ptr(ptrs[2]) };
        assert_eq!(last.to_str().unwrap(), "x");
    }

    #[test]
    fn test_c_array_rejects_interior_nul() {
        let argv = ArgumentVector::build(&["echo", "a\0b"]).unwrap();
        assert!(argv.to_c_array().is_err());
    }

    #[test]
    fn test_empty_c_array() {
        let array = CStringArray::new(std::iter::empty::<&[u8]>()).unwrap();
        assert!(array.is_empty());
        assert!(unsafe { *array.as_ptr() }.is_null());
    }
}
