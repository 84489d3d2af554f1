use std::sync::OnceLock;

use regex::Regex;

use super::super::types::TableSpec;

/// `!@table@[h1|h2|!|c1|c2]` single-line table.
pub struct Table;

impl Table {
    /// Separates rows inside the brackets.
    pub const ROW_SEPARATOR: &'static str = "|!|";
    /// Separates cells inside a row.
    pub const CELL_SEPARATOR: char = '|';

    fn pattern() -> &'static Regex {
        static TABLE_REGEX: OnceLock<Regex> = OnceLock::new();
        TABLE_REGEX
            .get_or_init(|| Regex::new(r"^!(?:@table@)+(?:\[(.*?)\])+").expect("Invalid table regex"))
    }

    /// Parses a table line.
    ///
    /// With back-to-back bracket groups (`[a][b]`) the last one is the body.
    /// Text after the final `]` is ignored.
    pub fn parse(line: &str) -> Option<TableSpec> {
        let caps = Self::pattern().captures(line)?;
        let body = caps.get(1).map_or("", |m| m.as_str());
        let rows = body
            .split(Self::ROW_SEPARATOR)
            .map(|row| row.split(Self::CELL_SEPARATOR).map(str::to_string).collect())
            .collect();
        Some(TableSpec { rows })
    }
}
