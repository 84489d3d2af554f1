use super::super::types::HeadingLevel;

/// ATX-style heading with owned marker constant.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Splits a heading line into its level and the text after the marker run.
    ///
    /// The run must be 1 to 6 markers long and followed by at least one
    /// character, which by construction is not another marker.
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        if rest.is_empty() {
            return None;
        }
        let level = HeadingLevel::from_marker_count(line.len() - rest.len())?;
        Some((level, rest))
    }
}
