use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::CrawlError;
use crate::parser::{plaintext, summary, ExtractedPage};

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub keep_markdown: bool,
    pub json: bool,
    pub meta: bool,
}

/// Serialized as `{"content": ..., "links": [...]}`; meta fields only with `--meta`.
#[derive(Debug, Serialize)]
pub struct Article {
    pub content: String,
    pub links: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Article {
    pub fn build(page: ExtractedPage, url: &str, opts: OutputOptions) -> Self {
        let reduce = |s: String| {
            if opts.keep_markdown {
                s
            } else {
                plaintext::to_plaintext(&s)
            }
        };

        let (title, summary, url) = if opts.meta {
            (
                Some(reduce(summary::title(&page.markdown, url))),
                Some(reduce(summary::summary(&page.markdown))),
                Some(url.to_string()),
            )
        } else {
            (None, None, None)
        };

        Article {
            content: reduce(page.markdown),
            links: page.links,
            title,
            summary,
            url,
        }
    }
}

pub fn render(article: &Article, opts: OutputOptions) -> Result<String, CrawlError> {
    if opts.json {
        Ok(serde_json::to_string(article)?)
    } else {
        Ok(article.content.clone())
    }
}

/// Write to `path`, or to stdout followed by a newline.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<(), CrawlError> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| CrawlError::Write {
                path: path.display().to_string(),
                source,
            })?;
            info!("Saved to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text).map_err(|source| CrawlError::Write {
                path: "<stdout>".to_string(),
                source,
            })?;
        }
    }
    Ok(())
}
