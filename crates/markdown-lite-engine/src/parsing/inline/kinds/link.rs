/// `(label)[url]` hyperlink syntax.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'(';
    pub const LABEL_CLOSE: u8 = b')';
    pub const URL_OPEN: u8 = b'[';
    pub const URL_CLOSE: u8 = b']';

    /// Writes the anchor markup for a parsed link.
    ///
    /// `<` and `>` were escaped before inline parsing; a `"` would still end
    /// the attribute early, so it is written as an entity.
    pub fn write_anchor(label: &str, url: &str, out: &mut String) {
        out.push_str("<a href=\"");
        out.push_str(&url.replace('"', "&quot;"));
        out.push_str("\">");
        out.push_str(label);
        out.push_str("</a>");
    }
}
