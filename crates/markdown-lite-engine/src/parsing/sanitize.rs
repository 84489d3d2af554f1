use std::borrow::Cow;

/// Invisible characters that rich-text paste tends to put at the start of a line.
pub const ZERO_WIDTH: [char; 6] = [
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}',
];

/// Removes a single leading zero-width character, if present.
pub fn strip_zero_width(line: &str) -> &str {
    line.strip_prefix(ZERO_WIDTH).unwrap_or(line)
}

/// Escapes every `<` and `>` so no raw HTML survives into generated markup.
///
/// Runs before classification: all markup emitted later comes from markdown
/// syntax, never from the author's text.
pub fn escape_angle_brackets(line: &str) -> Cow<'_, str> {
    if !line.contains(['<', '>']) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + 8);
    for ch in line.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn strips_every_zero_width_kind(
        #[values('\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}')] zw: char,
    ) {
        assert_eq!(strip_zero_width(&format!("{zw}# Title")), "# Title");
    }

    #[test]
    fn strips_only_the_first_zero_width_char() {
        assert_eq!(strip_zero_width("\u{200B}\u{200C}x"), "\u{200C}x");
    }

    #[test]
    fn leaves_inner_zero_width_chars() {
        assert_eq!(strip_zero_width("a\u{200B}b"), "a\u{200B}b");
    }

    #[test]
    fn escapes_script_tag() {
        assert_eq!(
            escape_angle_brackets("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_each_bracket_in_a_run() {
        assert_eq!(escape_angle_brackets("<<>>"), "&lt;&lt;&gt;&gt;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_angle_brackets("plain"), Cow::Borrowed("plain")));
    }
}
