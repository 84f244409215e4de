/// Code span inline type with owned delimiter constant.
///
/// A single backtick on each side; no escaping and no multi-backtick runs.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static [u8] = b"`";
}
