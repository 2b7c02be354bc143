// Pure keyboard routing rules, kept free of web types so host tests can include them.

/// Keys whose browser default (focus change, page scroll, quick find) would
/// fight the game.
#[inline]
pub fn suppresses_browser_default(key: &str) -> bool {
    matches!(key, "Tab" | " " | "/" | "'" | "Enter")
}

/// Presses with Ctrl, Meta or Alt held are browser shortcuts (Ctrl+R, Cmd+L)
/// rather than typing.
#[inline]
pub fn is_shortcut(ctrl: bool, meta: bool, alt: bool) -> bool {
    ctrl || meta || alt
}
