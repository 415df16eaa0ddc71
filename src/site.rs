pub const SITE_DOMAIN: &str = "grokipedia.com";
pub const PAGE_PREFIX: &str = "https://grokipedia.com/page/";

/// Page URLs that the site serves under a different capitalisation.
const URL_FIXUPS: &[(&str, &str)] = &[(
    "https://grokipedia.com/page/Artificial_Intelligence",
    "https://grokipedia.com/page/Artificial_intelligence",
)];

/// Build the page URL for a topic identifier (`Elon_Musk`, `Tesla, Inc.` ...).
pub fn page_url(topic: &str) -> String {
    format!("{}{}", PAGE_PREFIX, topic.trim().replace(' ', "_"))
}

/// Accept a full URL, a scheme-less URL (`en.wikipedia.org/wiki/X`) or a
/// bare topic name. Only bare topics are rewritten onto the site.
pub fn resolve_input(input: &str) -> String {
    let input = input.trim();
    let url = if input.contains("://") {
        input.to_string()
    } else if is_bare_topic(input) {
        page_url(input)
    } else {
        format!("https://{}", input)
    };
    canonical_url(&url)
}

/// No scheme, no path and no host-like `name.tld` shape.
pub fn is_bare_topic(input: &str) -> bool {
    let input = input.trim();
    !input.contains("://") && !input.contains('/') && !looks_like_host(input)
}

fn looks_like_host(s: &str) -> bool {
    if s.contains(' ') || s.contains('_') {
        return false;
    }
    match s.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// A user-supplied URL outside the site earns a warning; topics never do.
pub fn needs_site_warning(input: &str) -> bool {
    !is_bare_topic(input) && !is_site_url(input)
}

pub fn canonical_url(url: &str) -> String {
    URL_FIXUPS
        .iter()
        .find(|(wrong, _)| *wrong == url)
        .map(|(_, right)| right.to_string())
        .unwrap_or_else(|| url.to_string())
}

pub fn is_site_url(url: &str) -> bool {
    url.contains(SITE_DOMAIN)
}
