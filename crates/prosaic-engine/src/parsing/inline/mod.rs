//! # Inline Style Scanning
//!
//! Cursor-based detection of inline code, bold and italic runs on prose lines.
//!
//! ## Modules
//!
//! - **`kinds`**: inline types with owned delimiters (`CodeSpan`, `Emphasis`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with lookaround
//! - **`scanner`**: `scan_inline_styles()` entry point and the fixed pass table
//!
//! ## Pass Order
//!
//! Inline code, `**bold**`, `__bold__`, `*italic*`, `_italic_`. Each pass is
//! independent; a match yields opening marker, content and closing marker.

pub mod cursor;
pub mod kinds;
pub mod scanner;

pub use scanner::{scan_inline_styles, scan_line};
