use std::sync::LazyLock;

use regex::Regex;

/// Same shape check the browser client applies: `local@domain.tld`, no
/// whitespace or extra `@`. Deliberately far short of RFC 5322.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
