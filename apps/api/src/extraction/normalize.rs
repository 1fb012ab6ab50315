use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// Word chars, whitespace and `@ . - + ( ) , : ;` survive; everything else becomes a space.
static DISALLOWED_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s@.\-+(),:;]").expect("valid regex"));

/// Normalizes raw document text before any extraction step.
///
/// Whitespace runs collapse to one space, characters outside the allow-list
/// are replaced with a space, and the result is collapsed again and trimmed.
/// The second collapse keeps the function idempotent.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let filtered = DISALLOWED_CHAR.replace_all(&collapsed, " ");
    WHITESPACE_RUN.replace_all(&filtered, " ").trim().to_string()
}
