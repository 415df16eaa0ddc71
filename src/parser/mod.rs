pub mod content;
pub mod links;
pub mod plaintext;
pub mod summary;

use crate::error::CrawlError;

/// What a fetched page yields before presentation.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub markdown: String,
    pub links: Vec<String>,
}

/// Two independent scans over the raw page: article markdown and page links.
pub fn process_page(html: &str) -> Result<ExtractedPage, CrawlError> {
    let markdown = content::extract_content(html);
    if markdown.is_empty() {
        return Err(CrawlError::ContentNotFound);
    }
    let links = links::extract_links(html);
    Ok(ExtractedPage { markdown, links })
}
