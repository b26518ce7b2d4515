//! Logging helpers for raw player input.
//! Answers are typed by a human and may contain anything; logs must stay single-line.

/// Longest slice of an answer that is copied into a log line.
const MAX_LOGGED_CHARS: usize = 120;

/// Quote a player-supplied string for a log line.
///
/// The result is wrapped in double quotes, control characters and quotes are
/// escaped the way `{:?}` would, and anything past [`MAX_LOGGED_CHARS`]
/// characters is replaced by an ellipsis.
pub fn quote_input(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_LOGGED_CHARS) + 4);
    out.push('"');
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_LOGGED_CHARS) {
        out.extend(ch.escape_debug());
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out.push('"');
    out
}
