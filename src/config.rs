use clap::Parser;
use url::Url;

/// Process configuration, read once at startup from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "amzscrape", version, about = "Amazon search-results scraper API")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// ScraperAPI key. Without it proxy mode is disabled.
    #[arg(long, env = "SCRAPER_API_KEY", hide_env_values = true)]
    pub scraper_api_key: Option<String>,

    /// Base of the search URL; `/s?k=<keyword>` is appended.
    #[arg(long, env = "AMAZON_URL", default_value = "https://www.amazon.com")]
    pub amazon_url: Url,

    #[arg(long, env = "SCRAPER_API_URL", default_value = "https://api.scraperapi.com/")]
    pub scraper_api_url: Url,
}

impl Config {
    /// The configured key, treating an empty or blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.scraper_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn proxy_available(&self) -> bool {
        self.api_key().is_some()
    }

    /// Builds a config pointing at the given upstreams with defaults for the rest.
    pub fn with_upstreams(amazon_url: Url, scraper_api_url: Url, key: Option<&str>) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            scraper_api_key: key.map(str::to_string),
            amazon_url,
            scraper_api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_flags() {
        let cfg = Config::try_parse_from([
            "amzscrape",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--amazon-url",
            "https://www.amazon.com",
            "--scraper-api-url",
            "https://api.scraperapi.com/",
        ])
        .unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.amazon_url.as_str(), "https://www.amazon.com/");
        assert_eq!(cfg.scraper_api_url.as_str(), "https://api.scraperapi.com/");
    }

    #[test]
    fn blank_key_disables_proxy() {
        let base = Url::parse("http://localhost/").unwrap();
        let cfg = Config::with_upstreams(base.clone(), base.clone(), Some("   "));
        assert!(!cfg.proxy_available());
        assert_eq!(cfg.api_key(), None);

        let cfg = Config::with_upstreams(base.clone(), base, Some("abc123"));
        assert!(cfg.proxy_available());
        assert_eq!(cfg.api_key(), Some("abc123"));
    }

    #[test]
    fn rejects_invalid_port() {
        let res = Config::try_parse_from(["amzscrape", "--port", "not-a-port"]);
        assert!(res.is_err());
    }
}
