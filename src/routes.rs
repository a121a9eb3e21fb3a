use actix_web::{HttpResponse, Responder, get, web};
use anyhow::Result;
use tracing::warn;

use crate::config::Config;
use crate::dashboard::DASHBOARD_HTML;
use crate::error::ScrapeError;
use crate::models::{ProxyStatus, ScrapeQuery, ScrapeRequest};
use crate::service::SearchScraper;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub scraper: SearchScraper,
}

impl AppState {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Ok(Self {
            scraper: SearchScraper::from_config(cfg)?,
        })
    }
}

// -------------------------
// HTTP Handlers
// -------------------------

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/html; charset=utf-8"))
        .body(DASHBOARD_HTML)
}

#[get("/healthz")]
async fn healthz() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[get("/api/scrape")]
async fn scrape(
    state: web::Data<AppState>,
    q: web::Query<ScrapeQuery>,
) -> Result<HttpResponse, ScrapeError> {
    let req = ScrapeRequest::try_from(q.into_inner()).inspect_err(|e| {
        warn!(kind = e.kind(), "rejecting scrape request: {e}");
    })?;
    let products = state.scraper.scrape(&req).await?;
    Ok(HttpResponse::Ok().json(products))
}

#[get("/api/scraperapi/account")]
async fn account(state: web::Data<AppState>) -> Result<HttpResponse, ScrapeError> {
    let body = state.scraper.account_raw().await?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

#[get("/api/scraperapi/credits")]
async fn credits(state: web::Data<AppState>) -> Result<HttpResponse, ScrapeError> {
    let estimate = state.scraper.credits().await?;
    Ok(HttpResponse::Ok().json(estimate))
}

#[get("/api/check-proxy")]
async fn check_proxy(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ProxyStatus {
        proxy_available: state.scraper.proxy_available(),
    })
}

/// Registers every route; shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(healthz)
        .service(scrape)
        .service(account)
        .service(credits)
        .service(check_proxy);
}
