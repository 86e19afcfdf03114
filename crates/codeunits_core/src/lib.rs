//! codeunits_core: Core text types shared by the codeunits crates.
//!
//! Positions are measured in UTF-16 code units, the unit of the JavaScript
//! lexical grammar, so every offset handed to a consumer can be used directly
//! against a JS string of the same source.

pub mod text;

// Re-export commonly used types
pub use text::{TextPos, TextSpan};
