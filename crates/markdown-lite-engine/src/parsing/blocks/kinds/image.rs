use std::sync::OnceLock;

use regex::Regex;

use super::super::types::ImageSpec;

/// `!@img@(src)[alt]` image line.
pub struct Image;

impl Image {
    fn pattern() -> &'static Regex {
        static IMG_REGEX: OnceLock<Regex> = OnceLock::new();
        IMG_REGEX.get_or_init(|| {
            Regex::new(r"^!(?:@img@)+\((.*?)\)+\[(.*?)\]").expect("Invalid image regex")
        })
    }

    pub fn parse(line: &str) -> Option<ImageSpec> {
        let caps = Self::pattern().captures(line)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Some(ImageSpec {
            src: group(1),
            alt: group(2),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_and_alt() {
        let img = Image::parse("!@img@(http://x/y.png)[alt text]").unwrap();
        assert_eq!(img.src, "http://x/y.png");
        assert_eq!(img.alt, "alt text");
    }

    #[test]
    fn empty_alt() {
        let img = Image::parse("!@img@(a.png)[]").unwrap();
        assert_eq!(img.src, "a.png");
        assert_eq!(img.alt, "");
    }

    #[test]
    fn missing_alt_brackets_do_not_match() {
        assert!(Image::parse("!@img@(a.png)").is_none());
        assert!(Image::parse("!@img@[alt](a.png)").is_none());
    }
}
