// Nerd-font glyphs. Terminals without a patched font show boxes.
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const SEP_LEFT: &str = "\u{e0b2}";

pub const FORGE: &str = "\u{f0e7}";
pub const SESSION: &str = "\u{f073}";
pub const CAMPAIGN: &str = "\u{f02d}";
pub const TRAINING: &str = "\u{f19d}";
pub const WORLD: &str = "\u{f0ac}";
pub const STREAK: &str = "\u{f06d}";

pub const CHECK: &str = "\u{f00c}";
pub const BOX_OPEN: &str = "\u{f096}";
pub const BOX_DONE: &str = "\u{f046}";
pub const CHEVRON: &str = "\u{f054}";
pub const SEARCH: &str = "\u{f002}";
pub const DOT: &str = "\u{25cf}";
