/// A symmetric inline marker and the tag pair it rewrites to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub marker: u8,
    pub open_tag: &'static str,
    pub close_tag: &'static str,
}

impl Emphasis {
    /// `*text*`
    pub const BOLD: Emphasis = Emphasis {
        marker: b'*',
        open_tag: "<strong>",
        close_tag: "</strong>",
    };

    /// `_text_`
    pub const ITALIC: Emphasis = Emphasis {
        marker: b'_',
        open_tag: "<i>",
        close_tag: "</i>",
    };

    /// Wraps already-rewritten inner markup in this emphasis' tags.
    pub fn wrap(&self, inner: &str, out: &mut String) {
        out.push_str(self.open_tag);
        out.push_str(inner);
        out.push_str(self.close_tag);
    }
}
