/// Horizontal rule. Only the exact line `---` qualifies.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const LINE: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line == Self::LINE
    }
}
