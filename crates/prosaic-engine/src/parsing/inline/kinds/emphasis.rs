/// Bold and italic delimiter runs.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG_STAR: &'static [u8] = b"**";
    pub const STRONG_UNDERSCORE: &'static [u8] = b"__";
    pub const STAR: &'static [u8] = b"*";
    pub const UNDERSCORE: &'static [u8] = b"_";
}
