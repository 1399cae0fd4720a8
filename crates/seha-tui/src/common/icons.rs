//! Decorative icon glyphs.
//!
//! Stateless lookup from the original feather-icon names to terminal-safe
//! glyphs. Unknown names fall back to a bullet.

pub fn glyph(name: &str) -> &'static str {
    match name {
        "home" => "⌂",
        "users" => "◉",
        "calendar" => "▦",
        "file-text" => "▤",
        "settings" => "⚙",
        "inbox" => "▣",
        "bell" => "◆",
        "activity" => "∿",
        "star" => "★",
        "clock" => "◷",
        "search" => "⌕",
        "clipboard" => "✎",
        "heart" => "♥",
        "dollar-sign" => "$",
        "help-circle" => "?",
        "log-out" => "↩",
        "user-plus" => "+",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(glyph("no-such-icon"), "•");
    }
}
