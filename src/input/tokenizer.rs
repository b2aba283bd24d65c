/// Splits one input line into whitespace-delimited tokens.
///
/// A trailing line terminator is dropped first. There is no quoting or
/// escaping: every run of whitespace separates two tokens, and leading or
/// trailing whitespace yields nothing.
pub fn tokenize(line: &str) -> Vec<&str> {
    strip_line_ending(line).split_whitespace().collect()
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_in_order() {
        assert_eq!(tokenize("ls -l /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
        assert!(tokenize("\n").is_empty());
        assert!(tokenize(" \t \r\n").is_empty());
    }

    #[test]
    fn test_collapses_runs_of_spaces() {
        assert_eq!(tokenize("  echo   a  b  "), vec!["echo", "a", "b"]);
    }

    #[test]
    fn test_strips_newline() {
        assert_eq!(tokenize("env\n"), vec!["env"]);
        assert_eq!(tokenize("exit\r\n"), vec!["exit"]);
    }

    #[test]
    fn test_no_quoting() {
        assert_eq!(
            tokenize("echo \"hello world\""),
            vec!["echo", "\"hello", "world\""]
        );
        assert_eq!(tokenize("a\\ b"), vec!["a\\", "b"]);
    }
}
