use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Failures of the scrape and account endpoints.
///
/// The `Display` text is the fixed message sent to the client; the wrapped
/// cause stays server-side.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Keyword is required")]
    MissingKeyword,

    #[error("No results found")]
    ResultsContainerNotFound,

    #[error("Failed to scrape Amazon")]
    ProxyNotConfigured,

    #[error("Failed to scrape Amazon")]
    Upstream(#[source] anyhow::Error),

    #[error("Failed to fetch ScraperAPI account details")]
    AccountFetch(#[source] anyhow::Error),
}

impl ScrapeError {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingKeyword => "missing_keyword",
            Self::ResultsContainerNotFound => "results_container_not_found",
            Self::ProxyNotConfigured => "proxy_not_configured",
            Self::Upstream(_) => "upstream",
            Self::AccountFetch(_) => "account_fetch",
        }
    }
}

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingKeyword => StatusCode::BAD_REQUEST,
            Self::ResultsContainerNotFound => StatusCode::NOT_FOUND,
            Self::ProxyNotConfigured | Self::Upstream(_) | Self::AccountFetch(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ScrapeError::MissingKeyword.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ScrapeError::ResultsContainerNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ScrapeError::Upstream(anyhow!("connection reset")).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ScrapeError::AccountFetch(anyhow!("timeout")).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ScrapeError::ProxyNotConfigured.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn kinds_are_distinct_labels() {
        let kinds = [
            ScrapeError::MissingKeyword.kind(),
            ScrapeError::ResultsContainerNotFound.kind(),
            ScrapeError::ProxyNotConfigured.kind(),
            ScrapeError::Upstream(anyhow!("x")).kind(),
            ScrapeError::AccountFetch(anyhow!("x")).kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
        assert_eq!(ScrapeError::MissingKeyword.kind(), "missing_keyword");
    }

    #[test]
    fn message_does_not_leak_cause() {
        let err = ScrapeError::Upstream(anyhow!("secret-host.internal refused"));
        assert_eq!(err.to_string(), "Failed to scrape Amazon");
    }
}
