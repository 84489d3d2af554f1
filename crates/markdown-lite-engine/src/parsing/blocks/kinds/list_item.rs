/// Unordered list item with owned marker constant.
pub struct ListItem;

impl ListItem {
    pub const MARKER: char = '-';

    /// Returns the text after the `-` marker.
    ///
    /// The marker must be followed by a character other than `#`.
    pub fn strip(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKER)?;
        if rest.is_empty() || rest.starts_with('#') {
            return None;
        }
        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker() {
        assert_eq!(ListItem::strip("- a"), Some(" a"));
        assert_eq!(ListItem::strip("-a"), Some("a"));
    }

    #[test]
    fn dash_then_hash_is_not_a_list_item() {
        assert_eq!(ListItem::strip("-# a"), None);
    }

    #[test]
    fn lone_dash_is_not_a_list_item() {
        assert_eq!(ListItem::strip("-"), None);
    }
}
