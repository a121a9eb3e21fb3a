use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// Placeholder for a field whose node is missing from an item.
pub const NOT_AVAILABLE: &str = "N/A";

/// One product entry pulled from a results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub rating: String,
    pub reviews: String,
    pub image: String,
}

/// Raw query string of `GET /api/scrape`.
#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub keyword: Option<String>,
    #[serde(rename = "useProxy")]
    pub use_proxy: Option<String>,
}

/// A validated scrape request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub keyword: String,
    pub use_proxy: bool,
}

impl TryFrom<ScrapeQuery> for ScrapeRequest {
    type Error = ScrapeError;

    fn try_from(q: ScrapeQuery) -> Result<Self, Self::Error> {
        let keyword = q
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ScrapeError::MissingKeyword)?
            .to_string();
        let use_proxy = q.use_proxy.as_deref().is_some_and(truthy);
        Ok(Self { keyword, use_proxy })
    }
}

fn truthy(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Usage counters reported by the proxy provider's account endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub request_limit: f64,
    pub request_count: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyStatus {
    pub proxy_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(keyword: Option<&str>, use_proxy: Option<&str>) -> ScrapeQuery {
        ScrapeQuery {
            keyword: keyword.map(str::to_string),
            use_proxy: use_proxy.map(str::to_string),
        }
    }

    #[test]
    fn blank_keywords_are_rejected() {
        for kw in [None, Some(""), Some("   "), Some("\t\n")] {
            let res = ScrapeRequest::try_from(query(kw, None));
            assert!(matches!(res, Err(ScrapeError::MissingKeyword)), "{kw:?}");
        }
    }

    #[test]
    fn keyword_is_trimmed() {
        let req = ScrapeRequest::try_from(query(Some("  gaming laptop "), None)).unwrap();
        assert_eq!(req.keyword, "gaming laptop");
        assert!(!req.use_proxy);
    }

    #[test]
    fn use_proxy_is_boolean_ish() {
        for (raw, want) in [
            ("true", true),
            ("TRUE", true),
            ("1", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("", false),
            ("maybe", false),
        ] {
            let req = ScrapeRequest::try_from(query(Some("laptop"), Some(raw))).unwrap();
            assert_eq!(req.use_proxy, want, "useProxy={raw}");
        }
    }

    #[test]
    fn account_status_ignores_extra_fields() {
        let raw = r#"{"concurrencyLimit":5,"requestCount":250,"failedRequestCount":3,"requestLimit":5000}"#;
        let status: AccountStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.request_limit, 5000.0);
        assert_eq!(status.request_count, 250.0);
    }

    #[test]
    fn proxy_status_uses_camel_case() {
        let json = serde_json::to_value(ProxyStatus { proxy_available: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "proxyAvailable": true }));
    }
}
