//! # Inline Rewriting
//!
//! Turns marker-stripped line text into embeddable markup.
//!
//! ## Architecture
//!
//! Three passes run in a fixed order (bold, italic, link). Each pass is a
//! cursor-based scan that produces `InlineNode`s with spans into its input,
//! then renders them; the next pass scans that output.
//!
//! ## Modules
//!
//! - **`types`**: `InlinePass` and `InlineNode`
//! - **`kinds`**: delimiter-owning types (`Emphasis`, `Link`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `rewrite_inline()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Within a pass the leftmost opener pairs with the nearest closer. Across
//! passes nothing is protected: link labels and URLs are subject to the bold
//! and italic passes that ran first.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_pass, rewrite_inline};
pub use types::{InlineNode, InlinePass};
