use std::time::Instant;

use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::credits::CreditEstimate;
use crate::error::ScrapeError;
use crate::extract::ProductSelectors;
use crate::fetch::Fetcher;
use crate::models::{AccountStatus, ProductRecord, ScrapeRequest};
use crate::target::{Targets, redacted};

/// One request, one fetch, one parse. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct SearchScraper {
    fetcher: Fetcher,
    selectors: ProductSelectors,
    targets: Targets,
}

impl SearchScraper {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new()?,
            selectors: ProductSelectors::new().context("compiling product selectors")?,
            targets: Targets::new(
                cfg.amazon_url.clone(),
                cfg.scraper_api_url.clone(),
                cfg.api_key().map(str::to_string),
            ),
        })
    }

    pub fn proxy_available(&self) -> bool {
        self.targets.has_api_key()
    }

    pub async fn scrape(&self, req: &ScrapeRequest) -> Result<Vec<ProductRecord>, ScrapeError> {
        let started = Instant::now();
        let search = self
            .targets
            .search_url(&req.keyword)
            .map_err(ScrapeError::Upstream)?;

        let url = if req.use_proxy {
            match self.targets.proxied(&search) {
                Some(u) => u,
                None => {
                    let err = ScrapeError::ProxyNotConfigured;
                    warn!(kind = err.kind(), keyword = %req.keyword, "proxy requested but no API key is configured");
                    return Err(err);
                }
            }
        } else {
            search
        };
        debug!(url = %redacted(&url), proxy = req.use_proxy, "scraping");

        let html = self.fetcher.fetch_html(&url).await.map_err(|e| {
            let cause = format!("{e:#}");
            let err = ScrapeError::Upstream(e);
            error!(kind = err.kind(), "Scraping failed: {cause}");
            err
        })?;

        let Some(products) = self.selectors.extract(&html) else {
            let err = ScrapeError::ResultsContainerNotFound;
            warn!(kind = err.kind(), keyword = %req.keyword, len = html.len(), "results container not found");
            return Err(err);
        };

        info!(
            keyword = %req.keyword,
            proxy = req.use_proxy,
            count = products.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scrape finished"
        );
        Ok(products)
    }

    /// Provider account JSON, byte for byte.
    pub async fn account_raw(&self) -> Result<Bytes, ScrapeError> {
        let Some(url) = self.targets.account_url() else {
            let err = ScrapeError::AccountFetch(anyhow::anyhow!("no ScraperAPI key configured"));
            warn!(kind = err.kind(), "account details requested but no API key is configured");
            return Err(err);
        };
        self.fetcher.fetch_json_raw(&url).await.map_err(|e| {
            let cause = format!("{e:#}");
            let err = ScrapeError::AccountFetch(e);
            error!(kind = err.kind(), "Failed to fetch ScraperAPI account details: {cause}");
            err
        })
    }

    pub async fn credits(&self) -> Result<CreditEstimate, ScrapeError> {
        let raw = self.account_raw().await?;
        let status: AccountStatus = serde_json::from_slice(&raw).map_err(|e| {
            let cause = e.to_string();
            let err = ScrapeError::AccountFetch(e.into());
            error!(kind = err.kind(), "ScraperAPI account payload lacks usage counters: {cause}");
            err
        })?;
        Ok(CreditEstimate::from(&status))
    }
}
