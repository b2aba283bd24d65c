use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn valued(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Suppress warnings"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Trace resolution and child processes"),
        );
        flags.insert(
            "not-found".to_string(),
            Flag::valued(
                "-n",
                "--not-found",
                "On unknown commands: exit (default when piped) or continue",
            ),
        );
        flags.insert(
            "history".to_string(),
            Flag::valued("-H", "--history", "History file for interactive sessions"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                let value = args.get(i + 1).ok_or_else(|| {
                    ShellError::FlagError(format!("Flag {} requires a value", arg))
                })?;
                flag.value = Some(value.clone());
                i += 1;
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags
            .get(name)
            .filter(|f| f.takes_value)
            .and_then(|f| f.value.as_ref())
    }

    pub fn usage(&self) -> String {
        let mut usage = String::from("Usage: simsh [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <value>", flag.long)
            } else {
                flag.long.clone()
            };
            usage.push_str(&format!(
                "  {}, {:<21} {}\n",
                flag.short, long, flag.description
            ));
        }
        usage
    }

    pub fn print_help(&self) {
        print!("{}", self.usage());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_switches() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"]))?;

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
        assert_eq!(flags.get_value("quiet"), None);
        Ok(())
    }

    #[test]
    fn test_valued_flag() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--not-found", "continue", "-H", "/tmp/h"]))?;

        assert_eq!(flags.get_value("not-found").map(String::as_str), Some("continue"));
        assert_eq!(flags.get_value("history").map(String::as_str), Some("/tmp/h"));
        Ok(())
    }

    #[test]
    fn test_missing_value() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["-n"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["--login"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let usage = Flags::new().usage();
        for long in ["--help", "--version", "--quiet", "--debug", "--not-found", "--history"] {
            assert!(usage.contains(long), "missing {}", long);
        }
    }
}
