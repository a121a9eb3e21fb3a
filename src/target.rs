use anyhow::{Context, Result};
use url::Url;

/// Builds the outbound URLs: the search page itself and its ScraperAPI wrappers.
#[derive(Debug, Clone)]
pub struct Targets {
    amazon: Url,
    scraper_api: Url,
    api_key: Option<String>,
}

impl Targets {
    pub fn new(amazon: Url, scraper_api: Url, api_key: Option<String>) -> Self {
        Self {
            amazon,
            scraper_api,
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `<amazon>/s?k=<keyword>`
    pub fn search_url(&self, keyword: &str) -> Result<Url> {
        let mut u = self.amazon.join("/s").context("invalid search base url")?;
        u.query_pairs_mut().clear().append_pair("k", keyword);
        Ok(u)
    }

    /// Wraps `target` in the proxy request URL. `None` without an API key.
    pub fn proxied(&self, target: &Url) -> Option<Url> {
        let key = self.api_key.as_deref()?;
        let mut u = self.scraper_api.clone();
        u.query_pairs_mut()
            .clear()
            .append_pair("api_key", key)
            .append_pair("url", target.as_str())
            .append_pair("device_type", "desktop");
        Some(u)
    }

    /// `<scraper_api>account?api_key=<key>`. `None` without an API key.
    pub fn account_url(&self) -> Option<Url> {
        let key = self.api_key.as_deref()?;
        let mut u = self.scraper_api.join("account").ok()?;
        u.query_pairs_mut().clear().append_pair("api_key", key);
        Some(u)
    }
}

/// Copy of `u` with the `api_key` query value masked, for logging.
pub fn redacted(u: &Url) -> String {
    if !u.query_pairs().any(|(k, _)| k == "api_key") {
        return u.to_string();
    }
    let mut masked = u.clone();
    let pairs: Vec<(String, String)> = u
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (&**k, &**v)));
    masked.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(key: Option<&str>) -> Targets {
        Targets::new(
            Url::parse("https://www.amazon.com").unwrap(),
            Url::parse("https://api.scraperapi.com/").unwrap(),
            key.map(str::to_string),
        )
    }

    #[test]
    fn search_url_encodes_keyword() {
        let u = targets(None).search_url("usb-c hub & dock").unwrap();
        assert_eq!(u.path(), "/s");
        let k: Vec<_> = u.query_pairs().filter(|(k, _)| k == "k").map(|(_, v)| v.into_owned()).collect();
        assert_eq!(k, vec!["usb-c hub & dock".to_string()]);
        assert!(!u.as_str().contains(' '));
        assert!(u.as_str().contains("%26"));
    }

    #[test]
    fn proxied_wraps_search_url() {
        let t = targets(Some("k3y"));
        let search = t.search_url("laptop").unwrap();
        let u = t.proxied(&search).unwrap();
        assert_eq!(u.host_str(), Some("api.scraperapi.com"));
        let pairs: Vec<(String, String)> = u.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert_eq!(
            pairs,
            vec![
                ("api_key".to_string(), "k3y".to_string()),
                ("url".to_string(), "https://www.amazon.com/s?k=laptop".to_string()),
                ("device_type".to_string(), "desktop".to_string()),
            ]
        );
        // the nested URL must not leak its own query separators
        assert!(u.as_str().contains("url=https%3A%2F%2Fwww.amazon.com%2Fs%3Fk%3Dlaptop"));
    }

    #[test]
    fn no_key_means_no_proxy() {
        let t = targets(None);
        let search = t.search_url("laptop").unwrap();
        assert!(t.proxied(&search).is_none());
        assert!(t.account_url().is_none());
    }

    #[test]
    fn account_url_carries_key() {
        let u = targets(Some("k3y")).account_url().unwrap();
        assert_eq!(u.as_str(), "https://api.scraperapi.com/account?api_key=k3y");
    }

    #[test]
    fn redacted_masks_key() {
        let u = targets(Some("k3y")).account_url().unwrap();
        let shown = redacted(&u);
        assert!(!shown.contains("k3y"));
        assert!(shown.contains("api_key=***") || shown.contains("api_key=%2A%2A%2A"));
    }
}
