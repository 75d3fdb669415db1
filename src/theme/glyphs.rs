pub const LOGO: &str = "◆";
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const SEARCH: &str = "⌕";
pub const ARROW: &str = "→";
pub const CURSOR: &str = "▏";
