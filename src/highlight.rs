use std::borrow::Cow;

use inksac::prelude::*;

/// Colours the command word of the line being edited.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Green command word if `is_known` accepts it, red otherwise. Spacing
    /// and the rest of the line are kept byte for byte.
    pub fn highlight_command<'l, F>(&self, line: &'l str, is_known: F) -> Cow<'l, str>
    where
        F: Fn(&str) -> bool,
    {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return Cow::Borrowed(line);
        }

        let Some((start, end)) = command_span(line) else {
            return Cow::Borrowed(line);
        };
        let command = &line[start..end];

        let color = if is_known(command) {
            Color::Green
        } else {
            Color::Red
        };
        let style = Style::builder().foreground(color).bold().build();

        Cow::Owned(format!(
            "{}{}{}",
            &line[..start],
            command.style(style),
            &line[end..]
        ))
    }
}

/// Byte range of the first whitespace-delimited word.
fn command_span(line: &str) -> Option<(usize, usize)> {
    let start = line.find(|c: char| !c.is_whitespace())?;
    let end = line[start..]
        .find(char::is_whitespace)
        .map_or(line.len(), |len| start + len);
    Some((start, end))
}
