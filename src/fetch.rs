use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::settings::Settings;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.5";

/// Fetch a page as text. One attempt, bounded by `settings.timeout()`.
pub async fn fetch_page(url: &str, settings: &Settings) -> Result<String, FetchError> {
    let client = reqwest::Client::builder()
        .default_headers(browser_headers(settings))
        .timeout(settings.timeout())
        .build()
        .map_err(FetchError::Request)?;

    info!("Fetching: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify(e, settings, FetchError::Request))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let html = response
        .text()
        .await
        .map_err(|e| classify(e, settings, FetchError::Body))?;
    debug!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}

fn classify(
    e: reqwest::Error,
    settings: &Settings,
    other: fn(reqwest::Error) -> FetchError,
) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(settings.timeout_secs)
    } else {
        other(e)
    }
}

fn browser_headers(settings: &Settings) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let ua = HeaderValue::from_str(&settings.user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static(crate::settings::DEFAULT_USER_AGENT));
    headers.insert(USER_AGENT, ua);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));
    headers
}
