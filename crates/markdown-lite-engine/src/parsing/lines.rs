use serde::{Deserialize, Serialize};

/// How input text is cut into logical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineSplitting {
    /// Every line that was followed by a break keeps it, rendered as a
    /// trailing `<br>` inside headings, list items and paragraphs.
    #[default]
    PreserveBreaks,
    /// Plain split on `\n`; breaks are dropped. `"a\n"` yields `"a"` and an
    /// empty final line.
    Newline,
}

/// One logical line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
    /// Whether a visible break should follow this line's content.
    pub trailing_break: bool,
}

/// Splits `text` into logical lines.
///
/// Empty input always yields exactly one empty line.
pub fn split_lines(text: &str, strategy: LineSplitting) -> Vec<LineRef<'_>> {
    if text.is_empty() {
        return vec![LineRef {
            text: "",
            trailing_break: false,
        }];
    }

    match strategy {
        LineSplitting::Newline => text
            .split('\n')
            .map(|line| LineRef {
                text: strip_cr(line),
                trailing_break: false,
            })
            .collect(),
        LineSplitting::PreserveBreaks => text
            .split_inclusive('\n')
            .map(|line| match line.strip_suffix('\n') {
                Some(body) => LineRef {
                    text: strip_cr(body),
                    trailing_break: true,
                },
                None => LineRef {
                    text: strip_cr(line),
                    trailing_break: false,
                },
            })
            .collect(),
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
