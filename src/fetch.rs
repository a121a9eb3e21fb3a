use anyhow::{Context, Result, bail};
use bytes::Bytes;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, REFERER, USER_AGENT,
};
use tracing::debug;
use url::Url;

use crate::target::redacted;

const MAX_REDIRECTS: usize = 5;

const DESKTOP_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";

/// Header set sent with every page fetch. Accept-Encoding is left to reqwest.
fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_UA));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    h.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
    h
}

/// Thin wrapper over a shared reqwest client. No cookie jar: every fetch starts clean.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }

    /// GET `url` and return the body. Statuses outside [200,400) are errors.
    pub async fn fetch_html(&self, url: &Url) -> Result<String> {
        let rsp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("GET {} failed", redacted(url)))?;

        let status = rsp.status();
        let final_url = rsp.url().clone();
        debug!(
            "[fetch] {} -> status={} final={}",
            redacted(url),
            status,
            redacted(&final_url)
        );
        if !(200..400).contains(&status.as_u16()) {
            bail!("upstream answered {status}");
        }

        rsp.text().await.context("reading response body")
    }

    /// GET `url` and return the raw body, which must be a JSON document.
    pub async fn fetch_json_raw(&self, url: &Url) -> Result<Bytes> {
        let rsp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("GET {} failed", redacted(url)))?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;

        let body = rsp.bytes().await.context("reading response body")?;
        serde_json::from_slice::<serde_json::Value>(&body).context("body is not JSON")?;
        Ok(body)
    }
}
