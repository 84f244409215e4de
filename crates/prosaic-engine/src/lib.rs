pub mod annotate;
pub mod counting;
pub mod highlight;
pub mod parsing;
pub mod snapshot;
pub mod spelling;

// Re-export key types for easier usage
pub use annotate::*;
pub use counting::{DocumentStats, count_characters, count_words, normalize};
pub use highlight::{Highlight, HighlightLayer, HighlightMap, SpanCategory, StyledSpan, merge};
pub use parsing::{
    Heading, LineClass, MarkdownLineClassifier, extract_headings, extract_headings_raw,
    inline::scan_inline_styles, rope::Span,
};
pub use spelling::{Dictionary, DictionaryError, WordList, scan_spelling};
