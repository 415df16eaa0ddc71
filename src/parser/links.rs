use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static PAGE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://grokipedia\.com/page/([A-Za-z0-9_\-\(\)]+)").unwrap());

/// Collect same-site topic identifiers in first-seen order, without duplicates.
pub fn extract_links(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for caps in PAGE_LINK_RE.captures_iter(html) {
        let topic = clean_topic(&caps[1]);
        if topic.is_empty() || seen.contains(&topic) {
            continue;
        }
        seen.insert(topic.clone());
        links.push(topic);
    }

    links
}

/// Drop trailing backslashes and unmatched closing parens.
/// `Foo)` becomes `Foo`; `XAI_(company)` is left alone.
fn clean_topic(raw: &str) -> String {
    let mut topic = raw.trim_end_matches('\\').trim();
    while topic.ends_with(')') && topic.matches('(').count() < topic.matches(')').count() {
        topic = &topic[..topic.len() - 1];
    }
    topic.to_string()
}
