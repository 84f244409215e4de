pub mod lines;
pub mod span;

pub use lines::{rope_lines, split_lines};
pub use span::Span;
