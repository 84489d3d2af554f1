use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("style option `{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("style option `{field}` contains forbidden character {ch:?}")]
    ForbiddenChar { field: &'static str, ch: char },
}

/// Styling applied to generated elements. Read-only once a converter is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// CSS `font-family` for text blocks and tables.
    pub font_family: String,
    /// CSS `color` for text blocks and tables.
    pub color: String,
    /// Inline style for images. Omitted when empty.
    pub image_style: String,
    /// Class attribute for tables. Omitted when empty.
    pub table_class: String,
    /// Inline style for tables, placed before color and font.
    pub table_style: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            color: "black".to_string(),
            image_style: String::new(),
            table_class: String::new(),
            table_style: String::new(),
        }
    }
}

impl StyleOptions {
    /// Characters that would let a single value spill into other CSS declarations.
    const DECLARATION_BREAKERS: [char; 3] = [';', '{', '}'];
    const CLASS_BREAKERS: [char; 4] = ['"', '<', '>', ';'];

    /// Checks every field can be emitted as a single attribute or declaration.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (field, value) in [("font_family", &self.font_family), ("color", &self.color)] {
            if value.trim().is_empty() {
                return Err(OptionsError::Empty { field });
            }
            check_chars(field, value, &Self::DECLARATION_BREAKERS)?;
        }
        check_chars("table_class", &self.table_class, &Self::CLASS_BREAKERS)
    }
}

fn check_chars(field: &'static str, value: &str, forbidden: &[char]) -> Result<(), OptionsError> {
    match value.chars().find(|c| forbidden.contains(c)) {
        Some(ch) => Err(OptionsError::ForbiddenChar { field, ch }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = StyleOptions::default();
        assert_eq!(opts.font_family, "Arial");
        assert_eq!(opts.color, "black");
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn empty_color_is_rejected() {
        let opts = StyleOptions {
            color: "  ".into(),
            ..Default::default()
        };
        assert_eq!(opts.validate(), Err(OptionsError::Empty { field: "color" }));
    }

    #[test]
    fn declaration_injection_is_rejected() {
        let opts = StyleOptions {
            font_family: "Arial; background: red".into(),
            ..Default::default()
        };
        assert_eq!(
            opts.validate(),
            Err(OptionsError::ForbiddenChar {
                field: "font_family",
                ch: ';'
            })
        );
    }

    #[test]
    fn table_style_may_hold_several_declarations() {
        let opts = StyleOptions {
            table_style: "width: 100%; border: 1px solid".into(),
            table_class: "table table-striped".into(),
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn quoted_table_class_is_rejected() {
        let opts = StyleOptions {
            table_class: "a\" onclick=\"x".into(),
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(OptionsError::ForbiddenChar { field: "table_class", .. })
        ));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            OptionsError::Empty { field: "color" }.to_string(),
            "style option `color` must not be empty"
        );
    }
}
