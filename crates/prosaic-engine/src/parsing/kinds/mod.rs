//! # Line Kinds
//!
//! Line-level markdown constructs that own their delimiters. Scanners and the
//! normalizer ask these types; they never hardcode `---`, ```` ``` ```` or `#`.

pub mod block_quote;
pub mod code_fence;
pub mod frontmatter;
pub mod heading;
pub mod list_marker;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use frontmatter::Frontmatter;
pub use heading::AtxHeading;
pub use list_marker::ListMarker;
pub use thematic_break::ThematicBreak;
