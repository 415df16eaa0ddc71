use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
static PARAGRAPH_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

const MIN_PARAGRAPH_CHARS: usize = 50;
const MAX_SUMMARY_CHARS: usize = 300;

/// Title from the first top-level heading, falling back to the page URL.
pub fn title(markdown: &str, url: &str) -> String {
    TITLE_RE
        .captures(markdown)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| title_from_url(url))
}

/// `https://grokipedia.com/page/Nikola_Tesla` → `Nikola Tesla`.
pub fn title_from_url(url: &str) -> String {
    let Some((_, slug)) = url.split_once("/page/") else {
        return "Unknown Topic".to_string();
    };
    let slug = slug.replace('_', " ");
    match urlencoding::decode(&slug) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => slug,
    }
}

/// First real paragraph after the title line, cut at a word boundary.
pub fn summary(markdown: &str) -> String {
    let body = markdown
        .split_once('\n')
        .map(|(_, rest)| rest)
        .unwrap_or("")
        .trim();

    let paragraph = PARAGRAPH_SPLIT_RE
        .split(body)
        .map(str::trim)
        .find(|p| is_prose(p));

    match paragraph {
        Some(p) => truncate_words(p, MAX_SUMMARY_CHARS),
        None => excerpt(body, MAX_SUMMARY_CHARS),
    }
}

/// Fallback: always cut at the last space and mark the cut, even when short.
fn excerpt(body: &str, max: usize) -> String {
    if body.is_empty() {
        return String::new();
    }
    let head: String = body.chars().take(max).collect();
    let cut = match head.rfind(' ') {
        Some(i) => head[..i].trim_end(),
        None => head.as_str(),
    };
    format!("{}...", cut)
}

fn is_prose(paragraph: &str) -> bool {
    !paragraph.is_empty()
        && !paragraph.starts_with('#')
        && !paragraph.starts_with("- ")
        && !paragraph.starts_with("* ")
        && paragraph.chars().count() > MIN_PARAGRAPH_CHARS
}

fn truncate_words(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max).collect();
    let cut = match truncated.rfind(' ') {
        Some(i) => truncated[..i].trim_end(),
        None => truncated.as_str(),
    };
    format!("{}...", cut)
}
