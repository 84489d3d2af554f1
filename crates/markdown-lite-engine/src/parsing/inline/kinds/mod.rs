//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters and the markup they expand
//! to. The parser reads these constants; it never hardcodes `*`, `_` or `(`.
//!
//! - **`Emphasis`**: `BOLD` (`*` → `<strong>`) and `ITALIC` (`_` → `<i>`)
//! - **`Link`**: `(label)[url]` → `<a href="url">label</a>`

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::Link;
