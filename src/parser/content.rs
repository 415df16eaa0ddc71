use std::sync::LazyLock;

use regex::Regex;

/// One streamed server-component chunk: `self.__next_f.push([1,"..."])</script>`.
static CHUNK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"self\.__next_f\.push\(\[1,"(.+?)"\]\)</script>"#).unwrap()
});

// Image URLs may carry escaped parens: ![alt](https://x/a\(1\).png).
// `\)` is tried before `[^)\n]`; a match never leaves its line.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\((?:\\\)|[^)\n])*\)").unwrap());
static EMPTY_REF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\]\([^)]+\)").unwrap());
static STRAY_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\)*\s*$").unwrap());
static INTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(https://grokipedia\.com/[^)]*\)").unwrap());
static EXTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(https?://[^)]+\)").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

const HEADING_WINDOW: usize = 100;

/// Extract the article body as cleaned markdown.
/// Returns an empty string when no chunk looks like an article.
pub fn extract_content(html: &str) -> String {
    let Some(chunk) = select_article_chunk(html) else {
        return String::new();
    };
    let markdown = unescape(chunk);
    strip_decoration(&markdown).trim().to_string()
}

/// Escaped payloads of every streamed chunk, in document order.
pub fn find_chunks(html: &str) -> Vec<&str> {
    CHUNK_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn select_article_chunk(html: &str) -> Option<&str> {
    find_chunks(html).into_iter().find(|c| is_article_chunk(c))
}

/// The article chunk opens with a top-level heading, either immediately
/// or after a short prefix. Operates on the still-escaped payload.
pub fn is_article_chunk(chunk: &str) -> bool {
    if chunk.starts_with("# ") {
        return true;
    }
    let end = chunk
        .char_indices()
        .nth(HEADING_WINDOW)
        .map(|(i, _)| i)
        .unwrap_or(chunk.len());
    chunk[..end].contains("\\n# ")
}

/// Resolve `\n`, `\t`, `\"`, `\'` and `\\` in a single left-to-right pass,
/// so `\\n` yields a backslash followed by `n`. Unknown escapes are kept.
pub fn unescape(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut chars = payload.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Remove images and reference links, reduce links to their text, and
/// squeeze blank runs. Order matters: images go before links.
pub fn strip_decoration(markdown: &str) -> String {
    let md = IMAGE_RE.replace_all(markdown, "");
    let md = EMPTY_REF_RE.replace_all(&md, "");
    let md = STRAY_PAREN_RE.replace_all(&md, "");
    let md = INTERNAL_LINK_RE.replace_all(&md, "${1}");
    let md = EXTERNAL_LINK_RE.replace_all(&md, "${1}");
    collapse_blank_lines(&md)
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(payload: &str) -> String {
        format!(r#"<script>self.__next_f.push([1,"{}"])</script>"#, payload)
    }

    #[test]
    fn no_markers_yields_empty() {
        assert_eq!(extract_content("<html><body><p>hi</p></body></html>"), "");
        assert_eq!(extract_content(""), "");
    }

    #[test]
    fn no_qualifying_chunk_yields_empty() {
        let html = push(r#"1:{\"nav\":true}"#) + &push("plain text");
        assert_eq!(find_chunks(&html).len(), 2);
        assert_eq!(extract_content(&html), "");
    }

    #[test]
    fn chunks_in_document_order() {
        let html = push("first") + "<div></div>" + &push("second");
        assert_eq!(find_chunks(&html), vec!["first", "second"]);
    }

    #[test]
    fn selects_heading_chunk_among_others() {
        let html = push(r#"0:[\"$\",\"nav\"]"#) + &push(r"# Tesla\n\nBody text.") + &push("# Later");
        assert_eq!(extract_content(&html), "# Tesla\n\nBody text.");
    }

    #[test]
    fn heading_after_short_prefix_qualifies() {
        assert!(is_article_chunk(r"8:T1f2c,\n# Tesla\nBody"));
        assert!(is_article_chunk("# Title"));
        assert!(!is_article_chunk("#Title"));
        assert!(!is_article_chunk("## not escaped newline # Title"));
    }

    #[test]
    fn heading_beyond_window_rejected() {
        let chunk = format!(r"{}\n# Late", "x".repeat(HEADING_WINDOW));
        assert!(!is_article_chunk(&chunk));
        let chunk = format!(r"{}\n# Early", "x".repeat(HEADING_WINDOW - 4));
        assert!(is_article_chunk(&chunk));
    }

    #[test]
    fn heading_window_counts_chars_not_bytes() {
        let chunk = format!(r"{}\n# Title", "é".repeat(90));
        assert!(is_article_chunk(&chunk));
    }

    #[test]
    fn unescape_sequences() {
        assert_eq!(unescape(r#"a\nb\tc\"d\'e\\f"#), "a\nb\tc\"d'e\\f");
    }

    #[test]
    fn unescaped_backslash_not_reprocessed() {
        assert_eq!(unescape(r"\\n"), "\\n");
        assert_eq!(unescape(r"\\\n"), "\\\n");
    }

    #[test]
    fn unknown_escape_kept() {
        assert_eq!(unescape(r"\u0026 and \"), "\\u0026 and \\");
    }

    #[test]
    fn image_with_escaped_parens_removed() {
        let md = r"before ![alt](http://x/a\(1\).png) after";
        assert_eq!(strip_decoration(md), "before  after");
    }

    #[test]
    fn image_ending_in_backslash_keeps_following_prose() {
        let md = "![a](C:\\dir\\)\n\nReal paragraph (with note) end.";
        assert_eq!(strip_decoration(md).trim(), "Real paragraph (with note) end.");
    }

    #[test]
    fn plain_image_removed() {
        assert_eq!(strip_decoration("![logo](https://x.com/l.png)Text"), "Text");
    }

    #[test]
    fn empty_reference_link_removed() {
        assert_eq!(
            strip_decoration("Founded in 2003.[](https://reuters.com/a)[](https://ft.com/b)"),
            "Founded in 2003."
        );
    }

    #[test]
    fn stray_paren_line_removed() {
        assert_eq!(strip_decoration("text\n)\nmore"), "text\n\nmore");
        assert_eq!(strip_decoration("text\n  ))  \nmore"), "text\n\nmore");
    }

    #[test]
    fn internal_link_reduced_to_text() {
        assert_eq!(
            strip_decoration("[Tesla](https://grokipedia.com/page/Tesla) builds cars"),
            "Tesla builds cars"
        );
    }

    #[test]
    fn external_link_reduced_to_text() {
        assert_eq!(strip_decoration("per [source](https://example.com/a)."), "per source.");
        assert_eq!(strip_decoration("[old](http://example.com)"), "old");
    }

    #[test]
    fn relative_link_untouched() {
        assert_eq!(strip_decoration("[x](/page/Y)"), "[x](/page/Y)");
    }

    #[test]
    fn blank_runs_collapse() {
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn escaped_image_inside_chunk() {
        let html = push(r"# Rocket\n\n![r](https://img.example/r_\\(1\\).jpg)\n\nLaunched.");
        assert_eq!(extract_content(&html), "# Rocket\n\nLaunched.");
    }

    #[test]
    fn fixture_markdown() {
        let html = std::fs::read_to_string("tests/fixtures/article.html").unwrap();
        let md = extract_content(&html);
        assert_eq!(
            md,
            "# Tesla, Inc.\n\n\
             **Tesla, Inc.** is an American company founded by Elon Musk that designs _electric vehicles_.\n\n\
             ## History\n\n\
             The company was named after Nikola Tesla. It said \"hello\"."
        );
    }
}
