use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static UNDERSCORE_BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());
static UNDERSCORE_ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_]+)_").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]+\)").unwrap());
static EMPTY_BRACKETS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\]").unwrap());

/// Reduce markdown to readable text. Wider emphasis markers go first so
/// `**x**` is not read as two italics.
pub fn to_plaintext(markdown: &str) -> String {
    let text = HEADING_RE.replace_all(markdown, "${2}");
    let text = BOLD_RE.replace_all(&text, "${1}");
    let text = ITALIC_RE.replace_all(&text, "${1}");
    let text = UNDERSCORE_BOLD_RE.replace_all(&text, "${1}");
    let text = UNDERSCORE_ITALIC_RE.replace_all(&text, "${1}");
    let text = LINK_RE.replace_all(&text, "${1}");
    let text = EMPTY_BRACKETS_RE.replace_all(&text, "");
    text.trim().to_string()
}
