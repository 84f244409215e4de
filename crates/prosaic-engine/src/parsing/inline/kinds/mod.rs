//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` TICK = b"`" ``
//! - **`Emphasis`**: `**`, `__` (bold) and `*`, `_` (italic)
//!
//! The scanner reads these constants; it never hardcodes `` ` `` or `*`.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
